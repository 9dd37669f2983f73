//! The set of services a running Folio instance exposes.
//!
//! HTTP handlers are generic over [`Deployment`] so the same router can run
//! against the local single-process wiring or a test harness.

use std::sync::Arc;

use async_trait::async_trait;
use folio_services::services::{
    config::{ConfigError, ServerConfig},
    contact::ContactService,
    profile::ProfileService,
};
use folio_utils::{assets::FrontendAssets, clock::Clock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to set up contact delivery: {0:#}")]
    ContactSender(anyhow::Error),
}

#[async_trait]
pub trait Deployment: Clone + Send + Sync + 'static {
    /// Build a deployment from the process environment.
    async fn new() -> Result<Self, DeploymentError>;

    fn config(&self) -> &ServerConfig;

    fn profile(&self) -> &ProfileService;

    fn contact(&self) -> &ContactService;

    fn frontend(&self) -> &FrontendAssets;

    fn clock(&self) -> &Arc<dyn Clock>;
}
