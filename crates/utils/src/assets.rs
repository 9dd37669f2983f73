//! Lookup of the pre-built single-page frontend.
//!
//! The bundle directory is produced by the frontend build and contains an
//! `index.html` entry document plus hashed assets. Any request path that does
//! not name a file inside the directory falls back to the entry document so
//! client-side routing keeps working.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use thiserror::Error;

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("frontend bundle not found at {0}")]
    NotBuilt(PathBuf),

    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file ready to be written to the response.
#[derive(Debug, Clone)]
pub struct Asset {
    pub content_type: String,
    pub bytes: Vec<u8>,
    /// True when the entry document was served in place of a missing path.
    pub is_fallback: bool,
}

#[derive(Debug, Clone)]
pub struct FrontendAssets {
    root: PathBuf,
}

impl FrontendAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub async fn is_built(&self) -> bool {
        is_file(&self.index_path()).await
    }

    /// Map a percent-encoded URL path onto a location inside the bundle
    /// directory.
    ///
    /// Returns `None` for the root path and for anything that would leave the
    /// directory, including traversal hidden behind escapes like `%2e%2e`.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let mut relative = PathBuf::new();

        for raw in request_path.split('/') {
            let segment = urlencoding::decode(raw).ok()?;
            if segment.is_empty() || segment == "." {
                continue;
            }
            if segment.contains(['/', '\\', '\0']) {
                return None;
            }
            match Path::new(&*segment).components().next() {
                Some(Component::Normal(part)) => relative.push(part),
                _ => return None,
            }
        }

        if relative.as_os_str().is_empty() {
            return None;
        }

        Some(self.root.join(relative))
    }

    /// Load the file for `request_path`, or the entry document when the path
    /// does not name an existing file.
    pub async fn load(&self, request_path: &str) -> Result<Asset, AssetError> {
        if !self.is_built().await {
            return Err(AssetError::NotBuilt(self.root.clone()));
        }

        if let Some(candidate) = self.resolve(request_path)
            && is_file(&candidate).await
        {
            return read_asset(candidate, false).await;
        }

        tracing::debug!("No asset for {request_path}, serving {INDEX_FILE}");
        read_asset(self.index_path(), true).await
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

async fn read_asset(path: PathBuf, is_fallback: bool) -> Result<Asset, AssetError> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;
    let content_type = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(Asset {
        content_type,
        bytes,
        is_fallback,
    })
}
