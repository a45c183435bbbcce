use super::INotificationEventRepo;
use crate::repos::shared::inmemory_repo::*;
use certreg_domain::{NotificationEvent, ID};

pub struct InMemoryNotificationEventRepo {
    events: std::sync::Mutex<Vec<NotificationEvent>>,
}

impl InMemoryNotificationEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationEventRepo for InMemoryNotificationEventRepo {
    async fn insert(&self, event: &NotificationEvent) -> anyhow::Result<()> {
        insert(event, &self.events);
        Ok(())
    }

    async fn find_by_record_and_days(
        &self,
        record_id: &ID,
        days_to_expiration: i64,
    ) -> Option<NotificationEvent> {
        let matches = find_by(&self.events, |e| {
            e.record_id == *record_id && e.days_to_expiration == days_to_expiration
        });
        matches.into_iter().next()
    }

    async fn find_all(&self) -> Vec<NotificationEvent> {
        find_all(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certreg_domain::TrainingRecord;
    use chrono::NaiveDate;

    fn record_factory() -> TrainingRecord {
        TrainingRecord {
            id: ID::new(),
            person_name: "Ola Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "Working at Heights".into(),
            date_completed: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            training_org: "SafetyCo".into(),
            last_modified: 0,
            modified_by: "admin@certreg.test".into(),
        }
    }

    #[tokio::test]
    async fn lookup_is_by_record_and_day_distance() {
        let repo = InMemoryNotificationEventRepo::new();
        let record = record_factory();
        let other = record_factory();

        repo.insert(&NotificationEvent::new(&record, 7, 100))
            .await
            .unwrap();
        repo.insert(&NotificationEvent::new(&record, 30, 100))
            .await
            .unwrap();

        assert!(repo.find_by_record_and_days(&record.id, 7).await.is_some());
        assert!(repo.find_by_record_and_days(&record.id, 30).await.is_some());
        // Same record, different day distance
        assert!(repo.find_by_record_and_days(&record.id, 0).await.is_none());
        // Same day distance, different record
        assert!(repo.find_by_record_and_days(&other.id, 7).await.is_none());
    }
}
