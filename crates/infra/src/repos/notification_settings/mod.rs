mod inmemory;

use certreg_domain::NotificationSettings;
pub use inmemory::InMemoryNotificationSettingsRepo;

/// The notification settings are a singleton document: `set` replaces the
/// whole document, there is no field-level merge.
#[async_trait::async_trait]
pub trait INotificationSettingsRepo: Send + Sync {
    async fn get(&self) -> Option<NotificationSettings>;
    async fn set(&self, settings: &NotificationSettings) -> anyhow::Result<()>;
}
