mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailRelayConfig};
pub use repos::{
    INotificationEventRepo, INotificationLogRepo, INotificationSettingsRepo, ITrainingRecordRepo,
    ITrainingTypeRepo, Repos,
};
pub use services::{Email, EmailRelayService, IEmailService, InMemoryEmailService};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct CertregContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub email: Arc<dyn IEmailService>,
}

impl CertregContext {
    /// Context backed entirely by in-memory collaborators. This is what
    /// the tests run against.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            email: Arc::new(InMemoryEmailService::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> CertregContext {
    let config = Config::new();
    let email: Arc<dyn IEmailService> = match config.email_relay.clone() {
        Some(relay) => Arc::new(EmailRelayService::new(relay)),
        None => {
            tracing::warn!(
                "EMAIL_RELAY_URL is not set. Digest emails will only be recorded in memory."
            );
            Arc::new(InMemoryEmailService::new())
        }
    };

    CertregContext {
        repos: Repos::create_inmemory(),
        config,
        sys: Arc::new(RealSys {}),
        email,
    }
}
