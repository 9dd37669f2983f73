//! Shared building blocks used across the Folio crates.

pub mod assets;
pub mod clock;
pub mod logging;
pub mod response;
