//! Static endpoint catalog supplied to the client driver.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mechanism::{HONO, NATIVE};

/// One selectable demo endpoint. Defined at startup, immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Unique short identifier within the catalog.
    pub id: String,
    /// Fixed path to invoke.
    pub url: String,
    /// Human label used in log lines.
    pub display_name: String,
    /// One-line blurb about the routing mechanism.
    pub description: String,
}

/// The full catalog: one descriptor per supported routing mechanism.
pub fn catalog() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor {
            id: "native".to_string(),
            url: NATIVE.path.to_string(),
            display_name: NATIVE.label.to_string(),
            description: "Uses standard request/response handling directly.".to_string(),
        },
        EndpointDescriptor {
            id: "hono".to_string(),
            url: HONO.path.to_string(),
            display_name: "Hono Framework".to_string(),
            description: "Mounts a full sub-application inside a single route prefix.".to_string(),
        },
    ]
}

/// Look up a descriptor by id.
pub fn find_endpoint(id: &str) -> Result<EndpointDescriptor> {
    catalog()
        .into_iter()
        .find(|endpoint| endpoint.id == id)
        .ok_or_else(|| Error::UnknownEndpoint(id.to_string()))
}
