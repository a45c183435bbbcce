use serde::{Deserialize, Serialize};

pub mod get_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub total_records: usize,
        pub expiring_soon: usize,
        pub expired: usize,
    }
}
