//! RouteDemo client driver and CLI support.
//!
//! The driver issues one demo request at a time against a chosen endpoint,
//! measures wall-clock round-trip latency, and accumulates a newest-first
//! textual log of request, response, and error lines.

pub mod driver;
pub mod output;

pub use driver::{DemoDriver, DriverError, FetchOutcome};
