use certreg_domain::NotificationSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsDTO {
    pub emails: Vec<String>,
    pub intervals: Vec<i64>,
    pub updated_at: i64,
    pub updated_by: String,
}

impl NotificationSettingsDTO {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            emails: settings.emails,
            intervals: settings.intervals,
            updated_at: settings.updated_at,
            updated_by: settings.updated_by,
        }
    }
}
