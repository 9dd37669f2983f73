use axum::{
    extract::{State, rejection::JsonRejection},
    response::Json,
};
use folio_deployment::Deployment;
use folio_services::services::contact::ContactPayload;
use serde::{Deserialize, Serialize};

use crate::{DeploymentImpl, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact
pub async fn submit_contact(
    State(deployment): State<DeploymentImpl>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::MalformedPayload(e.body_text()))?;

    let message = deployment.contact().submit(payload).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: message.to_string(),
    }))
}
