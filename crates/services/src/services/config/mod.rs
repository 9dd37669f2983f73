//! Server configuration
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! the binary before this runs). Unset variables fall back to defaults; set
//! but unparseable values are rejected so a typo never silently changes
//! behavior.

use std::{fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_PROFILE_PATH: &str = "data/profile.json";
pub const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where contact submissions are forwarded when a webhook is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub profile_path: PathBuf,
    pub frontend_dist: PathBuf,
    /// Keep the profile document in memory between requests.
    pub profile_cache: bool,
    pub contact_webhook: Option<WebhookConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            frontend_dist: PathBuf::from(DEFAULT_FRONTEND_DIST),
            profile_cache: true,
            contact_webhook: None,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let contact_webhook = get("CONTACT_WEBHOOK_URL").map(|url| WebhookConfig {
            url,
            token: get("CONTACT_WEBHOOK_TOKEN"),
        });

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            profile_path: get("PROFILE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.profile_path),
            frontend_dist: get("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or(defaults.frontend_dist),
            profile_cache: parse_flag("PROFILE_CACHE", get("PROFILE_CACHE"), defaults.profile_cache)?,
            contact_webhook,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        tracing::debug!("{key} not set, using default: {default}");
        return Ok(default);
    };

    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw,
            reason: "expected true or false".to_string(),
        }),
    }
}
