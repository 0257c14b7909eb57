use actix_web::web;

pub mod health;
pub mod wordle;

/// Register every route. Used by `main.rs` and by the HTTP test harness so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/wordle").configure(wordle::configure_routes));
}
