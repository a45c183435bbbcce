mod inmemory;

use certreg_domain::{TrainingRecord, ID};
pub use inmemory::InMemoryTrainingRecordRepo;

#[async_trait::async_trait]
pub trait ITrainingRecordRepo: Send + Sync {
    async fn insert(&self, record: &TrainingRecord) -> anyhow::Result<()>;
    async fn save(&self, record: &TrainingRecord) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> Option<TrainingRecord>;
    async fn find_all(&self) -> Vec<TrainingRecord>;
    async fn delete(&self, record_id: &ID) -> Option<TrainingRecord>;
}
