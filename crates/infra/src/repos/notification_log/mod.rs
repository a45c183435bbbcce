mod inmemory;

use certreg_domain::NotificationLogEntry;
pub use inmemory::InMemoryNotificationLogRepo;

/// Append-only audit log of successful digest dispatches
#[async_trait::async_trait]
pub trait INotificationLogRepo: Send + Sync {
    async fn append(&self, entry: &NotificationLogEntry) -> anyhow::Result<()>;
    async fn find_all(&self) -> Vec<NotificationLogEntry>;
}
