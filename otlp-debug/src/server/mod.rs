//! HTTP ingestion shell
//!
//! Accepts OTLP/HTTP profile exports, renders a report per request and hands
//! it to a [`ReportSink`]. The shell owns transport concerns only:
//! - Method and body-size validation (405 / 413)
//! - `Content-Encoding` negotiation
//! - Status mapping: malformed payloads are client errors (400), never 500
//!
//! Each request decodes its own tree; the only shared state is the sink and
//! the immutable [`ServerConfig`] values.

pub mod handlers;
pub mod sink;

use crate::domain::ServerError;
use axum::extract::DefaultBodyLimit;
use axum::routing::{any, post};
use axum::Router;
use log::{info, warn};
use otlp_debug_common::{DEFAULT_PORT, HEALTH_PATH, PROFILES_PATH};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;

pub use handlers::{health, ingest_profiles, method_not_allowed, ACK_BODY};
pub use sink::{frame_report, MemorySink, ReportSink, StdoutSink};

/// Default cap on request bodies (raw and decompressed)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen: SocketAddr,

    /// Largest accepted body, before and after decompression
    pub max_body_bytes: usize,

    /// Return the report in the response body instead of the plain ack
    pub echo_report: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            echo_report: false,
        }
    }
}

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn ReportSink>,
    pub max_body_bytes: usize,
    pub echo_report: bool,
}

impl AppState {
    #[must_use]
    pub fn new(config: &ServerConfig, sink: Arc<dyn ReportSink>) -> Self {
        Self { sink, max_body_bytes: config.max_body_bytes, echo_report: config.echo_report }
    }
}

/// Build the router serving the profiles and health endpoints
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route(PROFILES_PATH, post(ingest_profiles).fallback(method_not_allowed))
        .route(HEALTH_PATH, any(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Serve until Ctrl+C.
///
/// # Errors
/// Returns [`ServerError::Bind`] if the listen address is unavailable, or an
/// I/O error raised while serving.
pub async fn serve(config: ServerConfig, sink: Arc<dyn ReportSink>) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServerError::Bind { addr: config.listen, source })?;
    info!("Listening on http://{}", listener.local_addr()?);

    let app = create_router(AppState::new(&config, sink));
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
