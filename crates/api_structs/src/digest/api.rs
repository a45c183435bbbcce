use crate::dtos::NotificationLogEntryDTO;
use serde::{Deserialize, Serialize};

pub mod send_digest {
    use super::*;
    use certreg_domain::NotificationLogEntry;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        /// False when there was nothing to send (no qualifying records or
        /// no configured recipients)
        pub dispatched: bool,
        pub entry: Option<NotificationLogEntryDTO>,
    }

    impl APIResponse {
        pub fn new(entry: Option<NotificationLogEntry>) -> Self {
            Self {
                dispatched: entry.is_some(),
                entry: entry.map(NotificationLogEntryDTO::new),
            }
        }
    }
}
