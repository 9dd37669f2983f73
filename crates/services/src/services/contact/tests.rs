//! Tests for contact submission and delivery

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

use super::{
    CONTACT_ACKNOWLEDGEMENT, ContactError, ContactPayload, ContactSender, ContactService,
    ContactSubmission, LogSender, ValidationError, WebhookPayload, WebhookSender,
};

// NOTE: tokens in this file are fake test values.

#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<ContactSubmission>>,
}

#[async_trait]
impl ContactSender for RecordingSender {
    async fn send(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

struct FailingSender;

#[async_trait]
impl ContactSender for FailingSender {
    async fn send(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("mail relay unavailable"))
    }
}

fn payload(name: &str, email: &str, message: &str) -> ContactPayload {
    ContactPayload {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        message: Some(message.to_string()),
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello there".to_string(),
    }
}

#[tokio::test]
async fn test_submit_accepts_valid_payload() {
    let sender = Arc::new(RecordingSender::default());
    let service = ContactService::new(sender.clone());

    let ack = service.submit(payload("A", "a@b.com", "hi")).await.unwrap();

    assert_eq!(ack, CONTACT_ACKNOWLEDGEMENT);
    let sent = sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "a@b.com");
}

#[tokio::test]
async fn test_submit_rejects_missing_fields_without_sending() {
    let sender = Arc::new(RecordingSender::default());
    let service = ContactService::new(sender.clone());

    let err = service
        .submit(payload("", "a@b.com", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ContactError::Invalid(ValidationError::MissingFields)
    ));
    assert_eq!(err.to_string(), "All fields are required");
    assert!(sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_rejects_invalid_email() {
    let service = ContactService::default();

    let err = service
        .submit(payload("A", "not-an-email", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ContactError::Invalid(ValidationError::InvalidEmail)
    ));
    assert_eq!(err.to_string(), "Invalid email address");
}

#[tokio::test]
async fn test_submit_reports_delivery_failure() {
    let service = ContactService::new(Arc::new(FailingSender));

    let err = service
        .submit(payload("A", "a@b.com", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ContactError::Delivery(_)));
    assert!(err.to_string().contains("mail relay unavailable"));
}

#[tokio::test]
async fn test_log_sender_always_succeeds() {
    LogSender.send(&submission()).await.unwrap();
}

#[tokio::test]
async fn test_webhook_posts_submission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hooks/contact"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello there"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sender = WebhookSender::new(format!("{}/hooks/contact", mock_server.uri()), None).unwrap();

    sender.send(&submission()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body: WebhookPayload = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&body.received_at).is_ok());
}

#[tokio::test]
async fn test_webhook_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hooks/contact"))
        .and(header("authorization", "Bearer fake-webhook-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sender = WebhookSender::new(
        format!("{}/hooks/contact", mock_server.uri()),
        Some("fake-webhook-token".to_string()),
    )
    .unwrap();

    sender.send(&submission()).await.unwrap();
}

#[tokio::test]
async fn test_webhook_error_status_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hooks/contact"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let sender = WebhookSender::new(format!("{}/hooks/contact", mock_server.uri()), None).unwrap();

    let err = sender.send(&submission()).await.unwrap_err();
    assert!(err.to_string().contains("502"));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn test_webhook_unreachable_is_failure() {
    // Nothing listens on port 9 (discard) in the test environment.
    let sender = WebhookSender::new("http://127.0.0.1:9/hooks".to_string(), None).unwrap();

    assert!(sender.send(&submission()).await.is_err());
}

#[tokio::test]
async fn test_service_with_failing_webhook_reports_delivery_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let sender = WebhookSender::new(mock_server.uri(), None).unwrap();
    let service = ContactService::new(Arc::new(sender));

    let err = service
        .submit(payload("A", "a@b.com", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::Delivery(_)));
}
