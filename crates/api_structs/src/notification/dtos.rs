use certreg_domain::{NotificationEvent, NotificationLogEntry, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEventDTO {
    pub record_id: ID,
    pub person_name: String,
    pub training_type: String,
    pub company: String,
    pub days_to_expiration: i64,
    pub expiry_date: NaiveDate,
    pub timestamp: i64,
    pub sent: bool,
}

impl NotificationEventDTO {
    pub fn new(event: NotificationEvent) -> Self {
        Self {
            record_id: event.record_id,
            person_name: event.person_name,
            training_type: event.training_type,
            company: event.company,
            days_to_expiration: event.days_to_expiration,
            expiry_date: event.expiry_date,
            timestamp: event.timestamp,
            sent: event.sent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLogEntryDTO {
    pub id: ID,
    pub timestamp: i64,
    pub recipient_count: usize,
    pub record_count: usize,
    pub expired: usize,
    pub urgent: usize,
    pub upcoming: usize,
}

impl NotificationLogEntryDTO {
    pub fn new(entry: NotificationLogEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            recipient_count: entry.recipient_count,
            record_count: entry.record_count,
            expired: entry.expired,
            urgent: entry.urgent,
            upcoming: entry.upcoming,
        }
    }
}
