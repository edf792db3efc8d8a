//! BeatCrest: a beat-marketplace backend plus the signup-to-payment
//! workflow the storefront drives.

use actix_web::web;

pub mod catalog;
pub mod routes;
pub mod services;
pub mod signup;

/// Wires every route plus the JSON 404 catch-all onto an app. The beat
/// store and server-start instants are app data supplied by the caller so
/// workers share one store.
pub fn configure(cfg: &mut web::ServiceConfig) {
    routes::health::init(cfg);
    routes::beats::init(cfg);
    cfg.default_service(web::to(routes::health::not_found));
}
