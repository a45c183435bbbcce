mod inmemory;

pub use inmemory::InMemoryTrainingTypeRepo;

/// Catalog of training type names offered in the record form
#[async_trait::async_trait]
pub trait ITrainingTypeRepo: Send + Sync {
    async fn insert(&self, training_type: &str) -> anyhow::Result<()>;
    async fn find_all(&self) -> Vec<String>;
    async fn delete(&self, training_type: &str) -> Option<String>;
}
