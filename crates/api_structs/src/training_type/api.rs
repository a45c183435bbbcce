use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingTypesResponse {
    pub training_types: Vec<String>,
}

impl TrainingTypesResponse {
    pub fn new(training_types: Vec<String>) -> Self {
        Self { training_types }
    }
}

pub mod add_training_type {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    pub type APIResponse = TrainingTypesResponse;
}

pub mod get_training_types {
    use super::*;

    pub type APIResponse = TrainingTypesResponse;
}

pub mod delete_training_type {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub name: String,
    }

    pub type APIResponse = TrainingTypesResponse;
}
