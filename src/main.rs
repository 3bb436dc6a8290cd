//! Shiprocket Bridge
//!
//! Shipping backend for the marketplace: proxies order submission,
//! courier serviceability checks, pickup location registration and invoice
//! retrieval to the ShipRocket logistics API.

use actix_web::{web, App, HttpServer, middleware};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

mod api;
mod carrier;
mod config;
mod domain;

use crate::carrier::ShipRocketClient;
use crate::config::Settings;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Settings,
    pub carrier: ShipRocketClient,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shiprocket_bridge=info".parse()?)
                .add_directive("actix_web=info".parse()?)
        )
        .json()
        .init();

    let settings = Settings::load().context("failed to load configuration")?;
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);
    let workers = settings.workers();

    let shiprocket = ShipRocketClient::new(&settings.shiprocket)
        .context("failed to create ShipRocket HTTP client")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind = %bind_addr,
        carrier = %shiprocket.base_url(),
        workers,
        "Starting Shiprocket Bridge"
    );

    if carrier::Credentials::from_env().is_none() {
        tracing::warn!(
            "{} / {} not set; carrier calls will fail until they are",
            carrier::credentials::EMAIL_VAR,
            carrier::credentials::PASSWORD_VAR
        );
    }

    let app_state = web::Data::new(AppState { settings, carrier: shiprocket });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Service", "shiprocket-bridge"))
                    .add(("X-Version", env!("CARGO_PKG_VERSION")))
            )
            .configure(api::configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
