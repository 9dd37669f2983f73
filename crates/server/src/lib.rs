use std::time::Duration;

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    middleware::from_fn,
};
use folio_deployment::Deployment;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod middleware;
pub mod routes;

pub type DeploymentImpl = folio_local_deployment::LocalDeployment;

/// The full application: routes plus the response layers every request
/// passes through.
pub fn app(deployment: &DeploymentImpl) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    routes::router(deployment)
        .layer(from_fn(middleware::security_headers))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(deployment: DeploymentImpl) -> anyhow::Result<()> {
    warn_on_missing_files(&deployment).await;

    let address = deployment.config().bind_address();
    tracing::info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("Server running on {address}");

    axum::serve(listener, app(&deployment))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn warn_on_missing_files(deployment: &DeploymentImpl) {
    let profile_path = deployment.profile().loader().path();
    if tokio::fs::metadata(profile_path).await.is_err() {
        tracing::warn!(
            "Profile file {:?} does not exist yet, /api/profile will fail until it does",
            profile_path
        );
    }

    if !deployment.frontend().is_built().await {
        tracing::warn!(
            "No frontend build at {:?}, page requests will return 503",
            deployment.frontend().root()
        );
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
