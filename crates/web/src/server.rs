//! Demo endpoint service implementation

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use routedemo_common::mechanism::{HONO, HONO_PREFIX, NATIVE};
use routedemo_common::payload::DemoPayload;

use crate::hono::hono_router;

/// Service configuration.
///
/// The labels and body strings are fixed (see `routedemo_common::mechanism`);
/// only the simulated delays are adjustable, defaulting to the canonical
/// 500 ms / 800 ms pair.
#[derive(Clone, Debug)]
pub struct DemoServerConfig {
    pub native_delay: Duration,
    pub hono_delay: Duration,
}

impl Default for DemoServerConfig {
    fn default() -> Self {
        Self {
            native_delay: NATIVE.delay,
            hono_delay: HONO.delay,
        }
    }
}

/// Demo endpoint server. Holds no mutable state; concurrent requests are
/// independent and one request's delay does not block another.
#[derive(Clone)]
pub struct DemoServer {
    config: Arc<DemoServerConfig>,
}

impl DemoServer {
    pub fn new(config: DemoServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create router
    pub fn router(&self) -> Router {
        Router::new()
            // Direct handler on a single fixed path
            .route(NATIVE.path, get(native_handler))
            // Sub-application mounted at its prefix; carries its own
            // JSON catch-all which applies only under the prefix
            .nest(HONO_PREFIX, hono_router())
            // Fallback
            .fallback(not_found_handler)
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
            .layer(TraceLayer::new_for_http())
            .with_state(self.config.clone())
    }

    /// Start the demo server
    pub async fn serve(self, addr: SocketAddr) -> anyhow::Result<()> {
        info!("Demo endpoint service starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

impl Default for DemoServer {
    fn default() -> Self {
        Self::new(DemoServerConfig::default())
    }
}

async fn native_handler(State(config): State<Arc<DemoServerConfig>>) -> impl IntoResponse {
    // Simulate database latency
    tokio::time::sleep(config.native_delay).await;

    info!(framework = NATIVE.label, path = NATIVE.path, "answered demo request");
    Json(DemoPayload::new(&NATIVE))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
