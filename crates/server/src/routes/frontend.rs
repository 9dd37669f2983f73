use axum::{
    extract::State,
    http::{
        HeaderValue, Method, Uri,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use folio_deployment::Deployment;

use crate::{DeploymentImpl, error::ApiError};

/// Serve a file from the frontend build, or its entry document for client-side
/// routes.
pub async fn serve_frontend(
    State(deployment): State<DeploymentImpl>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::MethodNotAllowed);
    }

    let asset = deployment.frontend().load(uri.path()).await?;
    let mut response = ([(CONTENT_TYPE, asset.content_type)], asset.bytes).into_response();

    // Entry document is always revalidated.
    if asset.is_fallback {
        response
            .headers_mut()
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    }

    Ok(response)
}
