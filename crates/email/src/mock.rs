//! Mock Email Service Implementation
//!
//! Provides in-memory email capture for testing without external
//! dependencies. Integration tests use it to assert that registration
//! confirmations were produced and reference the right event.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService};

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

impl CapturedEmail {
    /// Extract the event ID referenced by this email
    pub fn extract_event_id(&self) -> Option<Uuid> {
        // First check metadata
        if let Some(event_id_str) = self.message.metadata.get("event_id") {
            if let Ok(uuid) = Uuid::parse_str(event_id_str) {
                return Some(uuid);
            }
        }

        // Try to extract from URL patterns in email body
        let text = format!(
            "{} {}",
            self.message.body_text,
            self.message.body_html.as_deref().unwrap_or("")
        );

        let pattern = r"/events/([0-9a-f-]{36})";
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(captures) = re.captures(&text) {
                if let Some(uuid_str) = captures.get(1) {
                    if let Ok(uuid) = Uuid::parse_str(uuid_str.as_str()) {
                        return Some(uuid);
                    }
                }
            }
        }

        None
    }
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    email_by_recipient: Arc<Mutex<HashMap<String, Vec<CapturedEmail>>>>,
    enabled: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            email_by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: true,
        }
    }

    /// Create a disabled mock email service (for testing)
    pub fn new_disabled() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            email_by_recipient: Arc::new(Mutex::new(HashMap::new())),
            enabled: false,
        }
    }

    /// Get all captured emails
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Get emails sent to a specific recipient
    pub fn get_emails_for_recipient(&self, email: &str) -> Vec<CapturedEmail> {
        self.email_by_recipient
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .unwrap_or_default()
    }

    /// Get the most recent registration confirmation for a recipient
    pub fn get_latest_confirmation_email(&self, email: &str) -> Option<CapturedEmail> {
        self.get_emails_for_recipient(email)
            .into_iter()
            .filter(|e| {
                e.message
                    .metadata
                    .get("email_type")
                    .map(|t| t == "registration_confirmation")
                    .unwrap_or(false)
                    || e.message.subject.to_lowercase().contains("registered")
            })
            .max_by_key(|e| e.captured_at)
    }

    /// Check if a confirmation email was sent to a specific address
    pub fn was_confirmation_sent_to(&self, email: &str) -> bool {
        self.get_latest_confirmation_email(email).is_some()
    }

    /// Get count of emails sent
    pub fn email_count(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    /// Clear all captured emails
    pub fn clear(&self) {
        self.emails.lock().unwrap().clear();
        self.email_by_recipient.lock().unwrap().clear();
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        if !self.enabled {
            tracing::warn!("Mock email service disabled, skipping send");
            return Ok(EmailReceipt {
                message_id: format!("disabled-{}", Uuid::new_v4()),
                sent_at: Utc::now(),
                provider: "mock-disabled".to_string(),
                metadata: message.metadata.clone(),
            });
        }

        tracing::info!("Mock email service capturing email to: {}", message.to);

        let receipt = EmailReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: message.metadata.clone(),
        };

        let captured = CapturedEmail {
            message: message.clone(),
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        };

        self.emails.lock().unwrap().push(captured.clone());

        self.email_by_recipient
            .lock()
            .unwrap()
            .entry(message.to)
            .or_default()
            .push(captured);

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        "events@campus.edu".to_string()
    }

    fn app_base_url(&self) -> &str {
        "http://localhost:3000"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_email_service() {
        let service = MockEmailService::new();

        let message = EmailMessage::new(
            "student@campus.test".to_string(),
            "events@campus.edu".to_string(),
            "Test Subject".to_string(),
            "Test body".to_string(),
        );

        let receipt = service.send_email(message).await.unwrap();

        assert!(receipt.message_id.starts_with("mock-"));
        assert_eq!(receipt.provider, "mock");
        assert_eq!(service.email_count(), 1);

        let emails = service.get_emails_for_recipient("student@campus.test");
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].message.subject, "Test Subject");
    }

    #[tokio::test]
    async fn test_registration_confirmation_email() {
        let service = MockEmailService::new();
        let event_id = Uuid::new_v4();

        let receipt = service
            .send_registration_confirmation(
                "NST Hackathon 2025",
                event_id,
                "Tech Hub, Building A",
                "2025-12-15 09:00 AM",
                "student@campus.test",
                "Alice",
            )
            .await
            .unwrap();

        assert_eq!(receipt.provider, "mock");

        let captured = service
            .get_latest_confirmation_email("student@campus.test")
            .unwrap();
        assert_eq!(captured.extract_event_id(), Some(event_id));

        assert!(service.was_confirmation_sent_to("student@campus.test"));
        assert!(!service.was_confirmation_sent_to("nobody@campus.test"));
    }

    #[test]
    fn test_event_id_extraction_from_body() {
        let message = EmailMessage::new(
            "student@campus.test".to_string(),
            "events@campus.edu".to_string(),
            "You're registered".to_string(),
            "Details: http://localhost:3000/events/550e8400-e29b-41d4-a716-446655440000"
                .to_string(),
        );

        let captured = CapturedEmail {
            message,
            receipt: EmailReceipt {
                message_id: "test".to_string(),
                sent_at: Utc::now(),
                provider: "test".to_string(),
                metadata: HashMap::new(),
            },
            captured_at: Utc::now(),
        };

        let extracted_id = captured.extract_event_id();
        assert_eq!(
            extracted_id.map(|u| u.to_string()),
            Some("550e8400-e29b-41d4-a716-446655440000".to_string())
        );
    }

    #[tokio::test]
    async fn test_disabled_mock_service() {
        let service = MockEmailService::new_disabled();

        let message = EmailMessage::new(
            "student@campus.test".to_string(),
            "events@campus.edu".to_string(),
            "Test Subject".to_string(),
            "Test body".to_string(),
        );

        let receipt = service.send_email(message).await.unwrap();

        assert!(receipt.message_id.starts_with("disabled-"));
        assert_eq!(receipt.provider, "mock-disabled");
        assert_eq!(service.email_count(), 0); // Email not captured when disabled
    }
}
