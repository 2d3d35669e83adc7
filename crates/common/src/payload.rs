//! Wire payload shapes and the client-side response record.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::mechanism::MechanismSpec;

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body of a successful demo response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoPayload {
    pub message: String,
    /// ISO-8601, server-assigned at response time.
    pub timestamp: String,
    /// Which routing mechanism produced the response.
    pub framework: String,
    pub status: u16,
}

impl DemoPayload {
    /// Build the canonical success body for a mechanism, stamped now.
    pub fn new(mechanism: &MechanismSpec) -> Self {
        Self {
            message: mechanism.message.to_string(),
            timestamp: iso_timestamp(),
            framework: mechanism.label.to_string(),
            status: 200,
        }
    }
}

/// Structured 404 body produced by the sub-application's catch-all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteNotFoundBody {
    pub error: String,
    /// Echoes exactly the path that was requested.
    pub path: String,
}

/// Client-side view of one completed round trip.
///
/// Owned by the driver and replaced wholesale by the next successful
/// request. `latency_ms` is measured by the client and is not part of
/// the wire payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseRecord {
    pub framework: String,
    pub timestamp_iso: String,
    pub status: u16,
    pub latency_ms: u64,
}

impl ResponseRecord {
    pub fn from_payload(payload: DemoPayload, latency_ms: u64) -> Self {
        Self {
            framework: payload.framework,
            timestamp_iso: payload.timestamp,
            status: payload.status,
            latency_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanism::{HONO, NATIVE};

    #[test]
    fn payload_matches_wire_contract() {
        let payload = DemoPayload::new(&NATIVE);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["framework"], "Astro Native");
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "Data fetched from Astro Native Endpoint");
    }

    #[test]
    fn timestamp_is_iso_8601() {
        let payload = DemoPayload::new(&HONO);
        assert!(chrono::DateTime::parse_from_rfc3339(&payload.timestamp).is_ok());
    }

    #[test]
    fn record_carries_client_measured_latency() {
        let payload = DemoPayload::new(&HONO);
        let record = ResponseRecord::from_payload(payload.clone(), 812);
        assert_eq!(record.framework, payload.framework);
        assert_eq!(record.timestamp_iso, payload.timestamp);
        assert_eq!(record.latency_ms, 812);
    }

    #[test]
    fn decodes_canonical_success_body() {
        let raw = r#"{
            "message": "Data fetched from Hono Router (Vercel Edge/Serverless)",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "framework": "Hono",
            "status": 200
        }"#;
        let payload: DemoPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.framework, "Hono");
    }
}
