mod inmemory;

use certreg_domain::{NotificationEvent, ID};
pub use inmemory::InMemoryNotificationEventRepo;

/// Events are keyed by the composite `(record_id, days_to_expiration)`.
/// The evaluator checks `find_by_record_and_days` before inserting, which
/// is the deduplication guard against re-notification. Events are never
/// updated or deleted by the application.
#[async_trait::async_trait]
pub trait INotificationEventRepo: Send + Sync {
    async fn insert(&self, event: &NotificationEvent) -> anyhow::Result<()>;
    async fn find_by_record_and_days(
        &self,
        record_id: &ID,
        days_to_expiration: i64,
    ) -> Option<NotificationEvent>;
    async fn find_all(&self) -> Vec<NotificationEvent>;
}
