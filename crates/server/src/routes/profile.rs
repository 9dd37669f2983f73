use axum::{
    extract::State,
    http::{
        HeaderMap, StatusCode,
        header::{CACHE_CONTROL, ETAG, IF_NONE_MATCH},
    },
    response::{IntoResponse, Json, Response},
};
use folio_deployment::Deployment;

use crate::{DeploymentImpl, error::ApiError};

/// GET /api/profile
///
/// Answers 304 when `If-None-Match` names the version currently served.
pub async fn get_profile(
    State(deployment): State<DeploymentImpl>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let snapshot = deployment.profile().get().await?;
    let metadata = &snapshot.metadata;
    let cache_headers = [
        (CACHE_CONTROL, metadata.cache_control()),
        (ETAG, metadata.etag.clone()),
    ];

    if let Some(if_none_match) = headers.get(IF_NONE_MATCH).and_then(|v| v.to_str().ok())
        && metadata.matches(if_none_match)
    {
        tracing::debug!("Profile not modified ({})", metadata.etag);
        return Ok((StatusCode::NOT_MODIFIED, cache_headers).into_response());
    }

    Ok((cache_headers, Json(snapshot.document.as_ref())).into_response())
}
