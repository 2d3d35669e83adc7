//! RouteDemo Endpoint Service
//!
//! Answers fixed-path GET requests with a deterministic, delayed JSON
//! payload identifying which routing mechanism served the request. Two
//! mechanisms are demonstrated side by side: a direct handler on a single
//! path and a sub-application mounted at a path prefix.

pub mod hono;
pub mod server;

pub use server::{DemoServer, DemoServerConfig};
