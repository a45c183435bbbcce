use crate::dtos::NotificationEventDTO;
use certreg_domain::NotificationEvent;
use serde::{Deserialize, Serialize};

pub mod check_notifications {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub created: Vec<NotificationEventDTO>,
    }

    impl APIResponse {
        pub fn new(created: Vec<NotificationEvent>) -> Self {
            Self {
                created: created.into_iter().map(NotificationEventDTO::new).collect(),
            }
        }
    }
}
