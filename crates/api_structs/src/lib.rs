mod digest;
mod notification;
mod record;
mod settings;
mod status;
mod training_type;

pub mod dtos {
    pub use crate::notification::dtos::*;
    pub use crate::record::dtos::*;
    pub use crate::settings::dtos::*;
}

pub use crate::digest::api::*;
pub use crate::notification::api::*;
pub use crate::record::api::*;
pub use crate::settings::api::*;
pub use crate::status::api::*;
pub use crate::training_type::api::*;
