use super::ITrainingTypeRepo;

pub struct InMemoryTrainingTypeRepo {
    training_types: std::sync::Mutex<Vec<String>>,
}

impl InMemoryTrainingTypeRepo {
    pub fn new() -> Self {
        Self {
            training_types: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITrainingTypeRepo for InMemoryTrainingTypeRepo {
    async fn insert(&self, training_type: &str) -> anyhow::Result<()> {
        let mut training_types = self.training_types.lock().unwrap();
        training_types.push(training_type.to_string());
        Ok(())
    }

    async fn find_all(&self) -> Vec<String> {
        self.training_types.lock().unwrap().clone()
    }

    async fn delete(&self, training_type: &str) -> Option<String> {
        let mut training_types = self.training_types.lock().unwrap();
        let pos = training_types.iter().position(|t| t == training_type)?;
        Some(training_types.remove(pos))
    }
}
