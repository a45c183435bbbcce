use crate::dtos::TrainingRecordDTO;
use certreg_domain::{TrainingRecord, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecordResponse {
    pub record: TrainingRecordDTO,
}

impl TrainingRecordResponse {
    pub fn new(record: TrainingRecord, today: NaiveDate) -> Self {
        Self {
            record: TrainingRecordDTO::new(record, today),
        }
    }
}

pub mod create_record {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub person_name: String,
        pub company: String,
        pub training_type: String,
        pub date_completed: NaiveDate,
        pub expiry_date: NaiveDate,
        pub training_org: String,
        pub modified_by: String,
    }

    pub type APIResponse = TrainingRecordResponse;
}

pub mod get_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    pub type APIResponse = TrainingRecordResponse;
}

pub mod get_records {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub records: Vec<TrainingRecordDTO>,
    }

    impl APIResponse {
        pub fn new(records: Vec<TrainingRecord>, today: NaiveDate) -> Self {
            Self {
                records: records
                    .into_iter()
                    .map(|record| TrainingRecordDTO::new(record, today))
                    .collect(),
            }
        }
    }
}

pub mod update_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub person_name: String,
        pub company: String,
        pub training_type: String,
        pub date_completed: NaiveDate,
        pub expiry_date: NaiveDate,
        pub training_org: String,
        pub modified_by: String,
    }

    pub type APIResponse = TrainingRecordResponse;
}

pub mod delete_record {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    pub type APIResponse = TrainingRecordResponse;
}
