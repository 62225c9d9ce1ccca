//! Icebreaker web service: name in, biography and conversation starters out.
//!
//! Wiring goes configuration -> [`Pipeline`] -> [`routes::app_router`]. The
//! binary in `main.rs` is a thin shell around [`run_server`].

pub mod config;
pub mod pipeline;
pub mod render;
pub mod routes;

pub use config::{AppConfig, ModelProvider, SecurityConfig};
pub use pipeline::{IceBreak, Pipeline};
pub use routes::{AppState, app_router};

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let pipeline = Pipeline::from_config(&config)?;
    let state = AppState {
        pipeline: Arc::new(pipeline),
        expose_error_details: config.security.expose_error_details,
    };
    let app = app_router(state, &config.security);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| "invalid host/port for icebreaker server")?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("icebreaker listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
