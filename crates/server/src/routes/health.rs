use axum::{extract::State, response::Json};
use folio_deployment::Deployment;
use folio_utils::clock::iso8601;
use serde::{Deserialize, Serialize};

use crate::DeploymentImpl;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check(State(deployment): State<DeploymentImpl>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: iso8601(deployment.clock().now()),
    })
}
