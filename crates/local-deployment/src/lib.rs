use std::sync::Arc;

use async_trait::async_trait;
use folio_deployment::{Deployment, DeploymentError};
use folio_services::services::{
    config::ServerConfig,
    contact::{ContactSender, ContactService, LogSender, WebhookSender},
    profile::{ProfileCache, ProfileLoader, ProfileService},
};
use folio_utils::{
    assets::FrontendAssets,
    clock::{Clock, SystemClock},
};

#[derive(Clone)]
pub struct LocalDeployment {
    inner: Arc<Inner>,
}

struct Inner {
    config: ServerConfig,
    profile: ProfileService,
    contact: ContactService,
    frontend: FrontendAssets,
    clock: Arc<dyn Clock>,
}

impl LocalDeployment {
    pub fn from_config(config: ServerConfig) -> Result<Self, DeploymentError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Wire services from `config`, picking the contact sender it asks for.
    pub fn with_clock(config: ServerConfig, clock: Arc<dyn Clock>) -> Result<Self, DeploymentError> {
        let sender: Arc<dyn ContactSender> = match &config.contact_webhook {
            Some(webhook) => {
                tracing::info!("Contact submissions will be forwarded to {}", webhook.url);
                Arc::new(WebhookSender::from_config(webhook).map_err(DeploymentError::ContactSender)?)
            }
            None => {
                tracing::info!("No contact webhook configured, submissions will only be logged");
                Arc::new(LogSender)
            }
        };

        Ok(Self::with_contact_sender(config, clock, sender))
    }

    pub fn with_contact_sender(
        config: ServerConfig,
        clock: Arc<dyn Clock>,
        sender: Arc<dyn ContactSender>,
    ) -> Self {
        let cache = config.profile_cache.then(ProfileCache::default);
        if cache.is_none() {
            tracing::info!("Profile cache disabled, reading {:?} on every request", config.profile_path);
        }

        let profile = ProfileService::with_parts(
            ProfileLoader::new(&config.profile_path),
            cache,
            clock.clone(),
        );
        let frontend = FrontendAssets::new(&config.frontend_dist);

        Self {
            inner: Arc::new(Inner {
                config,
                profile,
                contact: ContactService::new(sender),
                frontend,
                clock,
            }),
        }
    }
}

#[async_trait]
impl Deployment for LocalDeployment {
    async fn new() -> Result<Self, DeploymentError> {
        let config = ServerConfig::from_env()?;
        Self::from_config(config)
    }

    fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    fn profile(&self) -> &ProfileService {
        &self.inner.profile
    }

    fn contact(&self) -> &ContactService {
        &self.inner.contact
    }

    fn frontend(&self) -> &FrontendAssets {
        &self.inner.frontend
    }

    fn clock(&self) -> &Arc<dyn Clock> {
        &self.inner.clock
    }
}
