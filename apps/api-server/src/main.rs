//! # Folio API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::error::json_error_handler;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Folio API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let max_upload_bytes = config.max_upload_bytes;
    let asset_prefix = config.storage.url_prefix();
    let asset_dir = config.storage.asset_dir();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(max_upload_bytes)
                    .error_handler(json_error_handler),
            )
            .configure(handlers::configure_routes)
            .service(actix_files::Files::new(&asset_prefix, &asset_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
