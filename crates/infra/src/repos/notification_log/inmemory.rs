use super::INotificationLogRepo;
use crate::repos::shared::inmemory_repo::*;
use certreg_domain::NotificationLogEntry;

pub struct InMemoryNotificationLogRepo {
    entries: std::sync::Mutex<Vec<NotificationLogEntry>>,
}

impl InMemoryNotificationLogRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationLogRepo for InMemoryNotificationLogRepo {
    async fn append(&self, entry: &NotificationLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_all(&self) -> Vec<NotificationLogEntry> {
        find_all(&self.entries)
    }
}
