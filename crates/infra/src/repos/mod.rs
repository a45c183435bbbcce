mod notification_event;
mod notification_log;
mod notification_settings;
mod shared;
mod training_record;
mod training_type;

use notification_event::InMemoryNotificationEventRepo;
pub use notification_event::INotificationEventRepo;
use notification_log::InMemoryNotificationLogRepo;
pub use notification_log::INotificationLogRepo;
use notification_settings::InMemoryNotificationSettingsRepo;
pub use notification_settings::INotificationSettingsRepo;
use std::sync::Arc;
use training_record::InMemoryTrainingRecordRepo;
pub use training_record::ITrainingRecordRepo;
use training_type::InMemoryTrainingTypeRepo;
pub use training_type::ITrainingTypeRepo;

#[derive(Clone)]
pub struct Repos {
    pub records: Arc<dyn ITrainingRecordRepo>,
    pub settings: Arc<dyn INotificationSettingsRepo>,
    pub notification_events: Arc<dyn INotificationEventRepo>,
    pub notification_logs: Arc<dyn INotificationLogRepo>,
    pub training_types: Arc<dyn ITrainingTypeRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            records: Arc::new(InMemoryTrainingRecordRepo::new()),
            settings: Arc::new(InMemoryNotificationSettingsRepo::new()),
            notification_events: Arc::new(InMemoryNotificationEventRepo::new()),
            notification_logs: Arc::new(InMemoryNotificationLogRepo::new()),
            training_types: Arc::new(InMemoryTrainingTypeRepo::new()),
        }
    }
}
