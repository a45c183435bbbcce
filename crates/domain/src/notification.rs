use crate::record::TrainingRecord;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted marker that a record has been flagged at a given day
/// distance. The `(record_id, days_to_expiration)` pair is the sole
/// deduplication key: at most one event may exist per pair system-wide,
/// which is what keeps repeated evaluator runs from re-notifying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub record_id: ID,
    pub person_name: String,
    pub training_type: String,
    pub company: String,
    /// May be negative (already expired) or zero (expires today)
    pub days_to_expiration: i64,
    pub expiry_date: NaiveDate,
    /// Millis timestamp of creation
    pub timestamp: i64,
    /// Written once at creation, never flipped afterwards
    pub sent: bool,
}

impl NotificationEvent {
    pub fn new(record: &TrainingRecord, days_to_expiration: i64, timestamp: i64) -> Self {
        Self {
            record_id: record.id.clone(),
            person_name: record.person_name.clone(),
            training_type: record.training_type.clone(),
            company: record.company.clone(),
            days_to_expiration,
            expiry_date: record.expiry_date,
            timestamp,
            sent: false,
        }
    }
}

/// Audit entry appended after each successful digest dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationLogEntry {
    pub id: ID,
    pub timestamp: i64,
    pub recipient_count: usize,
    pub record_count: usize,
    pub expired: usize,
    pub urgent: usize,
    pub upcoming: usize,
}

impl Entity for NotificationLogEntry {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
