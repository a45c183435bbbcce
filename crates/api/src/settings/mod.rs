mod get_notification_settings;
mod set_notification_settings;

use actix_web::web;
use get_notification_settings::get_notification_settings_controller;
use set_notification_settings::set_notification_settings_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/settings/notifications",
        web::get().to(get_notification_settings_controller),
    );
    cfg.route(
        "/settings/notifications",
        web::put().to(set_notification_settings_controller),
    );
}
