//! Demo client driver
//!
//! Drives one demo request at a time: appends a log line when the request
//! is sent, measures the round trip with a wall clock, and on completion
//! either replaces the displayed record or appends an error line. Failures
//! never propagate past the driver.

use std::time::Instant;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use routedemo_common::endpoint::EndpointDescriptor;
use routedemo_common::payload::{DemoPayload, ResponseRecord};

/// Client-side failure taxonomy. Both kinds terminate in a log line.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The request could not complete at the transport level.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not valid JSON of the expected shape.
    #[error("decode failure: {0}")]
    Decode(String),
}

/// Result of one driver invocation.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Round trip succeeded; the record now carries the measured latency.
    Completed(ResponseRecord),
    /// A request was already pending; nothing was issued.
    Ignored,
    /// Transport or decode failure; the previous record is untouched.
    Failed(DriverError),
}

struct DriverState {
    pending: bool,
    latest: Option<ResponseRecord>,
    /// Newest entries first, unbounded for the session.
    logs: Vec<String>,
}

/// Single-flight demo request driver.
pub struct DemoDriver {
    http: reqwest::Client,
    base_url: String,
    state: RwLock<DriverState>,
}

impl DemoDriver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            state: RwLock::new(DriverState {
                pending: false,
                latest: None,
                logs: Vec::new(),
            }),
        }
    }

    /// Issue a GET against the endpoint and record the outcome.
    ///
    /// Re-entrant selection while a request is outstanding is a no-op:
    /// no second request is issued and no log line is appended.
    pub async fn fetch_and_record(&self, endpoint: &EndpointDescriptor) -> FetchOutcome {
        {
            let mut state = self.state.write().await;
            if state.pending {
                debug!(endpoint = %endpoint.id, "request already pending, ignoring selection");
                return FetchOutcome::Ignored;
            }
            state.pending = true;
            state.logs.insert(
                0,
                format!(
                    "[{}] Request sent to {}...",
                    endpoint.display_name, endpoint.url
                ),
            );
        }

        let url = format!("{}{}", self.base_url, endpoint.url);
        let start = Instant::now();
        let result = self.issue(&url).await;
        // Whole milliseconds, measured from just before the request to
        // just after the full body is decoded.
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let mut state = self.state.write().await;
        state.pending = false;
        match result {
            Ok(payload) => {
                let record = ResponseRecord::from_payload(payload, elapsed_ms);
                state.logs.insert(
                    0,
                    format!(
                        "[{}] Response received in {}ms",
                        endpoint.display_name, elapsed_ms
                    ),
                );
                state.latest = Some(record.clone());
                FetchOutcome::Completed(record)
            }
            Err(err) => {
                state.logs.insert(0, format!("[ERROR] Failed to fetch: {err}"));
                FetchOutcome::Failed(err)
            }
        }
    }

    async fn issue(&self, url: &str) -> Result<DemoPayload, DriverError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DriverError::Transport(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DriverError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| DriverError::Decode(e.to_string()))
    }

    /// Whether a request is currently outstanding.
    pub async fn is_pending(&self) -> bool {
        self.state.read().await.pending
    }

    /// The most recent successful round trip, if any.
    pub async fn latest(&self) -> Option<ResponseRecord> {
        self.state.read().await.latest.clone()
    }

    /// The full log feed, newest first.
    pub async fn logs(&self) -> Vec<String> {
        self.state.read().await.logs.clone()
    }
}
