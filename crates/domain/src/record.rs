use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A `TrainingRecord` is one tracked training certification: who holds it,
/// what training it covers and when it was completed and expires.
///
/// Both dates are calendar dates. Malformed or missing dates are rejected
/// at the API boundary, so a stored record always carries valid dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    pub id: ID,
    pub person_name: String,
    pub company: String,
    pub training_type: String,
    pub date_completed: NaiveDate,
    pub expiry_date: NaiveDate,
    /// The organisation that delivered the training
    pub training_org: String,
    /// Millis timestamp of the last create or update
    pub last_modified: i64,
    /// The operator that last modified this record
    pub modified_by: String,
}

impl Entity for TrainingRecord {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
