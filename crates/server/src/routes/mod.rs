//! HTTP routes
//!
//! - `GET  /api/profile`  profile document with cache headers
//! - `GET  /api/health`   liveness probe
//! - `POST /api/contact`  contact form intake
//! - anything else        built frontend (SPA fallback)

use axum::{
    Router,
    routing::{get, post},
};

use crate::{DeploymentImpl, error::ApiError};

pub mod contact;
pub mod frontend;
pub mod health;
pub mod profile;

pub fn router(deployment: &DeploymentImpl) -> Router {
    let api = Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/health", get(health::health_check))
        .route("/contact", post(contact::submit_contact))
        // Only covers routes registered above.
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .nest("/api", api)
        .fallback(frontend::serve_frontend)
        .with_state(deployment.clone())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
