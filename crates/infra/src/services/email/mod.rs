use crate::config::EmailRelayConfig;
use serde_json::json;
use std::sync::Mutex;
use tracing::info;

/// A composed mail ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub recipients: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[async_trait::async_trait]
pub trait IEmailService: Send + Sync {
    /// Delivers the mail to all recipients in one dispatch. An error means
    /// nothing was delivered; there is no partial-send tracking.
    async fn send(&self, email: &Email) -> anyhow::Result<()>;
}

/// Posts composed mails to an external relay endpoint which performs the
/// actual SMTP delivery.
pub struct EmailRelayService {
    client: reqwest::Client,
    relay: EmailRelayConfig,
}

impl EmailRelayService {
    pub fn new(relay: EmailRelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay,
        }
    }
}

#[async_trait::async_trait]
impl IEmailService for EmailRelayService {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        self.client
            .post(&self.relay.url)
            .header("certreg-relay-key", self.relay.key.as_str())
            .json(&json!({
                "to": email.recipients,
                "subject": email.subject,
                "html": email.html,
            }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Email service that only records outgoing mails. Used in tests and when
/// no relay is configured.
pub struct InMemoryEmailService {
    sent: Mutex<Vec<Email>>,
}

impl InMemoryEmailService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEmailService for InMemoryEmailService {
    async fn send(&self, email: &Email) -> anyhow::Result<()> {
        info!(
            "Recording digest email to {} recipients: {}",
            email.recipients.len(),
            email.subject
        );
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
