mod expiration;
mod notification;
mod record;
mod settings;
mod shared;

pub use expiration::{
    days_to_expiration, local_date, qualifying_records, DigestBucket, ExpirationStatus,
};
pub use notification::{NotificationEvent, NotificationLogEntry};
pub use record::TrainingRecord;
pub use settings::NotificationSettings;
pub use shared::entity::{Entity, ID};
