//! Fixed path/delay/label tuples for the two routing mechanisms.
//!
//! The two distinct delays and labels exist so a client can visibly tell
//! which mechanism answered. They are a demonstration contract, not a
//! performance characteristic, and must stay bit-for-bit stable.

use std::time::Duration;

/// Process-wide stateless configuration for one routing mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MechanismSpec {
    /// Fixed request path the mechanism answers on.
    pub path: &'static str,
    /// Simulated backend latency, applied as a non-blocking suspend.
    pub delay: Duration,
    /// Value of the `framework` field in the response body.
    pub label: &'static str,
    /// Value of the `message` field in the response body.
    pub message: &'static str,
}

/// Direct handler registered against a single fixed path.
pub const NATIVE: MechanismSpec = MechanismSpec {
    path: "/api/native",
    delay: Duration::from_millis(500),
    label: "Astro Native",
    message: "Data fetched from Astro Native Endpoint",
};

/// Prefix the sub-application is mounted at.
pub const HONO_PREFIX: &str = "/api/hono";

/// The one GET route exposed under the sub-application prefix.
pub const HONO: MechanismSpec = MechanismSpec {
    path: "/api/hono/data",
    delay: Duration::from_millis(800),
    label: "Hono",
    message: "Data fetched from Hono Router (Vercel Edge/Serverless)",
};

/// Error string returned by the sub-application's catch-all.
pub const ROUTE_NOT_FOUND_ERROR: &str = "Route not found in Hono app";
