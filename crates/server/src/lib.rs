//! Yatra HTTP Server
//!
//! Actix-web 기반 추천 REST API

pub mod routes;
pub mod state;
pub mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use yatra_common::{AppConfig, Result};
use yatra_recommend::EngineCache;

pub use state::AppState;

// Engines live for the whole process, one per dataset path
static ENGINES: Lazy<EngineCache> = Lazy::new(EngineCache::new);

/// Process-wide engine cache
pub fn engine_cache() -> &'static EngineCache {
    &ENGINES
}

/// Register every route on an actix service config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::recommend::recommend_place)
        .service(routes::recommend::recommend_keyword)
        .service(routes::catalog::places)
        .service(routes::catalog::filters)
        .service(routes::system::health);
}

/// Build the engine for the configured dataset and serve until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config, engine_cache())?);
    let bind_address = state.config.server_bind_address();

    info!("Starting HTTP server on {}", bind_address);

    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
