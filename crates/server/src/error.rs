use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_services::services::{
    contact::{CONTACT_DELIVERY_FAILED, ContactError, ValidationError},
    profile::ProfileError,
};
use folio_utils::{assets::AssetError, response::ErrorBody};
use thiserror::Error;

pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile data";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Profile(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(PROFILE_LOAD_FAILED),
            ),
            ApiError::Contact(ContactError::Invalid(reason)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new(reason.to_string()))
            }
            ApiError::Contact(ContactError::Delivery(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new(CONTACT_DELIVERY_FAILED),
            ),
            // A body we cannot read as the form is treated as an empty form.
            ApiError::MalformedPayload(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(ValidationError::MissingFields.to_string()),
            ),
            ApiError::Asset(AssetError::NotBuilt(_)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::new("Frontend not built")
                    .with_message("The frontend bundle has not been built yet.")
                    .with_hint(
                        "Run `npm run build` in the frontend directory or point FRONTEND_DIST at an existing build.",
                    ),
            ),
            ApiError::Asset(AssetError::Io { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Failed to load page"),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::new("Method not allowed"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!("{} ({})", self, status);
        } else {
            tracing::debug!("{} ({})", self, status);
        }

        (status, Json(body)).into_response()
    }
}
