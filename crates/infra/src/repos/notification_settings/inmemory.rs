use super::INotificationSettingsRepo;
use certreg_domain::NotificationSettings;

pub struct InMemoryNotificationSettingsRepo {
    settings: std::sync::Mutex<Option<NotificationSettings>>,
}

impl InMemoryNotificationSettingsRepo {
    pub fn new() -> Self {
        Self {
            settings: std::sync::Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl INotificationSettingsRepo for InMemoryNotificationSettingsRepo {
    async fn get(&self) -> Option<NotificationSettings> {
        self.settings.lock().unwrap().clone()
    }

    async fn set(&self, settings: &NotificationSettings) -> anyhow::Result<()> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_replaces_the_whole_document() {
        let repo = InMemoryNotificationSettingsRepo::new();
        assert!(repo.get().await.is_none());

        let first = NotificationSettings {
            emails: vec!["hse@acme.test".into()],
            intervals: vec![30, 7, 0],
            updated_at: 1,
            updated_by: "admin@acme.test".into(),
        };
        repo.set(&first).await.unwrap();
        assert_eq!(repo.get().await, Some(first));

        let second = NotificationSettings {
            emails: Vec::new(),
            intervals: vec![14],
            updated_at: 2,
            updated_by: "admin@acme.test".into(),
        };
        repo.set(&second).await.unwrap();
        // No merging with the previous document
        assert_eq!(repo.get().await, Some(second));
    }
}
