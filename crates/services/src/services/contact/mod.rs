//! Contact Intake
//!
//! Validates contact-form submissions and hands accepted ones to a
//! [`ContactSender`]. The default sender only logs; a webhook sender forwards
//! submissions to an external endpoint when one is configured.

pub mod sender;
pub mod service;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use sender::{ContactSender, LogSender, WebhookSender};
pub use service::{ContactError, ContactService};
pub use types::*;
pub use validator::{ContactValidator, ValidationError};
