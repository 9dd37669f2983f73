use serde::{Deserialize, Serialize};

/// Returned to the visitor when a submission is accepted.
pub const CONTACT_ACKNOWLEDGEMENT: &str =
    "Thank you for your message! I will get back to you soon.";

/// Returned to the visitor when delivery fails.
pub const CONTACT_DELIVERY_FAILED: &str = "Failed to send message. Please try again later.";

/// Raw form body. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body sent to a contact webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: String,
}
