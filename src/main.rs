use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use items_web::config::EnvConfig;
use items_web::db::postgres_service::PostgresService;
use items_web::routes::configure_routes;
use items_web::telemetry;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init().expect("Failed to initialize tracing");
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db.url())
            .await
            .expect("Failed to initialize PostgresService")
    );

    tracing::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
