use crate::dtos::NotificationSettingsDTO;
use certreg_domain::NotificationSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettingsResponse {
    pub settings: NotificationSettingsDTO,
}

impl NotificationSettingsResponse {
    pub fn new(settings: NotificationSettings) -> Self {
        Self {
            settings: NotificationSettingsDTO::new(settings),
        }
    }
}

pub mod get_notification_settings {
    use super::*;

    pub type APIResponse = NotificationSettingsResponse;
}

pub mod set_notification_settings {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub emails: Vec<String>,
        pub intervals: Vec<i64>,
        pub updated_by: String,
    }

    pub type APIResponse = NotificationSettingsResponse;
}
