use std::sync::Arc;

use folio_utils::clock::Clock;
use serde_json::Value;

use super::{
    cache::{CacheMetadata, CachedProfile, PROFILE_MAX_AGE, ProfileCache},
    document::ProfileDocument,
    loader::{ProfileError, ProfileLoader},
};

/// The document to send plus the headers that go with it.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub document: Arc<Value>,
    pub metadata: CacheMetadata,
}

impl ProfileSnapshot {
    fn from_entry(entry: CachedProfile) -> Self {
        Self {
            metadata: CacheMetadata::for_load(entry.loaded_at, PROFILE_MAX_AGE),
            document: entry.document,
        }
    }
}

pub struct ProfileService {
    loader: ProfileLoader,
    cache: Option<ProfileCache>,
    clock: Arc<dyn Clock>,
}

impl ProfileService {
    pub fn with_parts(
        loader: ProfileLoader,
        cache: Option<ProfileCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            loader,
            cache,
            clock,
        }
    }

    pub fn loader(&self) -> &ProfileLoader {
        &self.loader
    }

    pub fn cache(&self) -> Option<&ProfileCache> {
        self.cache.as_ref()
    }

    /// Return the profile, reading the file only when there is no fresh
    /// cached copy.
    ///
    /// A failed read leaves any previous cache entry untouched; the next call
    /// tries again.
    pub async fn get(&self) -> Result<ProfileSnapshot, ProfileError> {
        if let Some(cache) = &self.cache
            && let Some(entry) = cache.fresh(self.clock.now()).await
        {
            tracing::debug!("Profile cache hit (loaded at {})", entry.loaded_at);
            return Ok(ProfileSnapshot::from_entry(entry));
        }

        let value = self.loader.load().await?;
        log_loaded(&self.loader, &value);

        let document = Arc::new(value);
        let loaded_at = self.clock.now();
        let entry = match &self.cache {
            Some(cache) => cache.store(document, loaded_at).await,
            None => CachedProfile {
                document,
                loaded_at,
            },
        };

        Ok(ProfileSnapshot::from_entry(entry))
    }
}

fn log_loaded(loader: &ProfileLoader, value: &Value) {
    match ProfileDocument::from_value(value) {
        Ok(doc) => {
            let summary = doc.summary();
            tracing::info!(
                "Loaded profile {:?} for {} ({} experience, {} projects, {} education, {} certifications)",
                loader.path(),
                doc.owner_name().unwrap_or("<unnamed>"),
                summary.experience,
                summary.projects,
                summary.education,
                summary.certifications
            );
        }
        Err(e) => {
            tracing::warn!(
                "Loaded profile {:?} with unexpected structure, serving as-is: {}",
                loader.path(),
                e
            );
        }
    }
}
