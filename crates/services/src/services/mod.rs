pub mod config;
pub mod contact;
pub mod profile;
