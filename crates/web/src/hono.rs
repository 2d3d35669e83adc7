//! Sub-application mounted at a fixed path prefix.
//!
//! An independently composable router nested at `/api/hono`. It exposes one
//! GET route and a catch-all that answers every other path under the prefix
//! with a structured JSON 404 echoing the requested path.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;

use routedemo_common::mechanism::{HONO, ROUTE_NOT_FOUND_ERROR};
use routedemo_common::payload::{DemoPayload, RouteNotFoundBody};

use crate::server::DemoServerConfig;

/// Build the sub-router. State is applied by the parent router.
pub fn hono_router() -> Router<Arc<DemoServerConfig>> {
    Router::new()
        .route("/data", get(data_handler))
        .fallback(hono_not_found_handler)
}

async fn data_handler(State(config): State<Arc<DemoServerConfig>>) -> impl IntoResponse {
    // Simulate database processing latency
    tokio::time::sleep(config.hono_delay).await;

    info!(framework = HONO.label, path = HONO.path, "answered demo request");
    Json(DemoPayload::new(&HONO))
}

/// Catch-all for unmatched paths under the prefix. `OriginalUri` carries
/// the full request path, prefix included.
async fn hono_not_found_handler(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundBody {
            error: ROUTE_NOT_FOUND_ERROR.to_string(),
            path: uri.path().to_string(),
        }),
    )
}
