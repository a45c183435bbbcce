pub mod check_notifications;

use actix_web::web;
use check_notifications::check_notifications_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/check",
        web::post().to(check_notifications_controller),
    );
}
