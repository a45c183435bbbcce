use serde::{Deserialize, Serialize};

/// Recipients and day-distance intervals for expiration notifications.
///
/// This is a singleton document: every save replaces it wholesale, there
/// is no merging of individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Email addresses receiving the daily digest
    pub emails: Vec<String>,
    /// Day distances at which a record qualifies for notification.
    /// Membership is exact: a record fires only when its distance equals
    /// one of these values, not when it falls below a threshold.
    pub intervals: Vec<i64>,
    pub updated_at: i64,
    pub updated_by: String,
}
