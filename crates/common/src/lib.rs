//! Common types and utilities for RouteDemo
//!
//! Shared between the endpoint service (`routedemo-web`) and the client
//! driver (`routedemo-cli`): the endpoint catalog, wire payload shapes,
//! the client-side response record, and the error taxonomy.

pub mod endpoint;
pub mod error;
pub mod mechanism;
pub mod payload;

pub use endpoint::{catalog, find_endpoint, EndpointDescriptor};
pub use error::{Error, Result};
pub use mechanism::{MechanismSpec, HONO, HONO_PREFIX, NATIVE, ROUTE_NOT_FOUND_ERROR};
pub use payload::{iso_timestamp, DemoPayload, ResponseRecord, RouteNotFoundBody};
