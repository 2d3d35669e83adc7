//! Error types for RouteDemo

use thiserror::Error;

/// Result type alias using RouteDemo Error
pub type Result<T> = std::result::Result<T, Error>;

/// RouteDemo error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
