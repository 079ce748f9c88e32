use actix_web::web;

pub mod health;
pub mod index;
pub mod items;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index);
    cfg.service(items::data);
    cfg.service(
        web::scope("/health").service(health::health)
    );
}
