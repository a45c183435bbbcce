pub mod send_digest;

use actix_web::web;
use send_digest::send_digest_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/digest/send", web::post().to(send_digest_controller));
}
