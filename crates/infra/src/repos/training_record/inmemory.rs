use super::ITrainingRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use certreg_domain::{TrainingRecord, ID};

pub struct InMemoryTrainingRecordRepo {
    records: std::sync::Mutex<Vec<TrainingRecord>>,
}

impl InMemoryTrainingRecordRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITrainingRecordRepo for InMemoryTrainingRecordRepo {
    async fn insert(&self, record: &TrainingRecord) -> anyhow::Result<()> {
        insert(record, &self.records);
        Ok(())
    }

    async fn save(&self, record: &TrainingRecord) -> anyhow::Result<()> {
        save(record, &self.records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<TrainingRecord> {
        find(record_id, &self.records)
    }

    async fn find_all(&self) -> Vec<TrainingRecord> {
        find_all(&self.records)
    }

    async fn delete(&self, record_id: &ID) -> Option<TrainingRecord> {
        delete(record_id, &self.records)
    }
}
