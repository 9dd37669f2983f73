//! Profile Service
//!
//! Serves the portfolio owner's profile document from a JSON file on disk,
//! with an optional in-memory TTL cache in front of it.

mod cache;
mod document;
mod loader;
mod service;

pub use cache::{CacheMetadata, CachedProfile, PROFILE_MAX_AGE, ProfileCache, etag_for};
pub use document::{
    Certification, Education, Experience, Personal, ProfileDocument, ProfileSummary, Project,
    Skills,
};
pub use loader::{ProfileError, ProfileLoader};
pub use service::{ProfileService, ProfileSnapshot};
