mod config;
mod docx;
mod errors;
mod export;
mod layout;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AllowedOrigins, Config};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; invalid values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Document Export API v{}", env!("CARGO_PKG_VERSION"));

    let cors = build_cors_layer(&config.allowed_origins)?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST/PORT do not form a valid socket address")?;

    let state = AppState::new(config);
    info!(
        "Page setup: {} {}pt, margins {}\"/{}\"",
        state.page_setup.font,
        state.page_setup.font_size_pt,
        state.page_setup.margin_top_in,
        state.page_setup.margin_left_in
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive CORS for `*`, otherwise an explicit origin list.
fn build_cors_layer(origins: &AllowedOrigins) -> Result<CorsLayer> {
    match origins {
        AllowedOrigins::Any => Ok(CorsLayer::permissive()),
        AllowedOrigins::List(list) => {
            let origins = list
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o)
                        .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: '{o}'"))
                })
                .collect::<Result<Vec<_>>>()?;
            info!("CORS restricted to {} origin(s)", origins.len());

            Ok(CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any))
        }
    }
}
