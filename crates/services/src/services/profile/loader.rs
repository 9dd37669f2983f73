use std::{
    io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read profile file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("profile file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the backing JSON file. Never writes it.
#[derive(Debug, Clone)]
pub struct ProfileLoader {
    path: PathBuf,
}

impl ProfileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Value, ProfileError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ProfileError::NotFound(self.path.clone()),
                _ => ProfileError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;

        serde_json::from_str(&raw).map_err(|source| ProfileError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
