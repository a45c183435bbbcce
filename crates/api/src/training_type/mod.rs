mod add_training_type;
mod delete_training_type;
mod get_training_types;

use actix_web::web;
use add_training_type::add_training_type_controller;
use delete_training_type::delete_training_type_controller;
use get_training_types::get_training_types_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/training-types",
        web::get().to(get_training_types_controller),
    );
    cfg.route(
        "/training-types",
        web::post().to(add_training_type_controller),
    );
    cfg.route(
        "/training-types/{name}",
        web::delete().to(delete_training_type_controller),
    );
}
