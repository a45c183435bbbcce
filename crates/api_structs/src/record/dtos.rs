use certreg_domain::{days_to_expiration, ExpirationStatus, TrainingRecord, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A training record as presented to the client, with the day distance
/// and display status computed against "today".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecordDTO {
    pub id: ID,
    pub person_name: String,
    pub company: String,
    pub training_type: String,
    pub date_completed: NaiveDate,
    pub expiry_date: NaiveDate,
    pub training_org: String,
    pub last_modified: i64,
    pub modified_by: String,
    pub days_to_expiration: i64,
    pub status: ExpirationStatus,
}

impl TrainingRecordDTO {
    pub fn new(record: TrainingRecord, today: NaiveDate) -> Self {
        let days_to_expiration = days_to_expiration(record.expiry_date, today);
        Self {
            id: record.id,
            person_name: record.person_name,
            company: record.company,
            training_type: record.training_type,
            date_completed: record.date_completed,
            expiry_date: record.expiry_date,
            training_org: record.training_org,
            last_modified: record.last_modified,
            modified_by: record.modified_by,
            days_to_expiration,
            status: ExpirationStatus::from_days(days_to_expiration),
        }
    }
}
