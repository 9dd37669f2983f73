use std::sync::Arc;

use thiserror::Error;

use super::{
    sender::{ContactSender, LogSender},
    types::{CONTACT_ACKNOWLEDGEMENT, ContactPayload},
    validator::{ContactValidator, ValidationError},
};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("failed to deliver contact submission: {0:#}")]
    Delivery(anyhow::Error),
}

#[derive(Clone)]
pub struct ContactService {
    sender: Arc<dyn ContactSender>,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new(Arc::new(LogSender))
    }
}

impl ContactService {
    pub fn new(sender: Arc<dyn ContactSender>) -> Self {
        Self { sender }
    }

    /// Validate and deliver a submission, returning the acknowledgement text.
    ///
    /// Nothing is sent for a rejected payload.
    pub async fn submit(&self, payload: ContactPayload) -> Result<&'static str, ContactError> {
        let submission = ContactValidator::validate(payload).inspect_err(|e| {
            tracing::debug!("Rejected contact submission: {}", e);
        })?;

        self.sender
            .send(&submission)
            .await
            .map_err(ContactError::Delivery)?;

        Ok(CONTACT_ACKNOWLEDGEMENT)
    }
}
