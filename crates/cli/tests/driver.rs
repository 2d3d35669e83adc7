//! Driver lifecycle tests against a local endpoint service.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, routing::get, Json, Router};

use routedemo_cli::driver::{DemoDriver, DriverError, FetchOutcome};
use routedemo_common::endpoint::EndpointDescriptor;
use routedemo_common::mechanism::NATIVE;
use routedemo_common::payload::DemoPayload;

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn descriptor(url: &str) -> EndpointDescriptor {
    EndpointDescriptor {
        id: "test".to_string(),
        url: url.to_string(),
        display_name: "Test".to_string(),
        description: String::new(),
    }
}

#[tokio::test]
async fn successful_round_trip_updates_record_and_log() {
    let router = Router::new().route(
        "/api/native",
        get(|| async { Json(DemoPayload::new(&NATIVE)) }),
    );
    let addr = spawn(router).await;
    let driver = DemoDriver::new(format!("http://{addr}"));
    let endpoint = descriptor("/api/native");

    let record = match driver.fetch_and_record(&endpoint).await {
        FetchOutcome::Completed(record) => record,
        other => panic!("expected completion, got {other:?}"),
    };

    assert_eq!(record.framework, "Astro Native");
    assert_eq!(record.status, 200);
    assert!(!driver.is_pending().await);
    assert_eq!(driver.latest().await, Some(record));

    // Newest first: response line, then the earlier request line.
    let logs = driver.logs().await;
    assert_eq!(logs.len(), 2);
    assert!(logs[0].starts_with("[Test] Response received in "));
    assert!(logs[0].ends_with("ms"));
    assert_eq!(logs[1], "[Test] Request sent to /api/native...");
}

#[tokio::test]
async fn reselection_while_pending_is_ignored() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/api/slow",
            get(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(DemoPayload::new(&NATIVE))
            }),
        )
        .with_state(hits.clone());
    let addr = spawn(router).await;
    let driver = DemoDriver::new(format!("http://{addr}"));
    let endpoint = descriptor("/api/slow");

    let (first, second) = tokio::join!(driver.fetch_and_record(&endpoint), async {
        // Re-select while the first request is still in flight.
        tokio::time::sleep(Duration::from_millis(100)).await;
        driver.fetch_and_record(&endpoint).await
    });

    assert!(matches!(first, FetchOutcome::Completed(_)));
    assert!(matches!(second, FetchOutcome::Ignored));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    // Only the first request produced log lines.
    assert_eq!(driver.logs().await.len(), 2);
}

#[tokio::test]
async fn transport_failure_logs_error_and_clears_pending() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let driver = DemoDriver::new(format!("http://{addr}"));
    let outcome = driver.fetch_and_record(&descriptor("/api/native")).await;

    assert!(matches!(
        outcome,
        FetchOutcome::Failed(DriverError::Transport(_))
    ));
    assert!(!driver.is_pending().await);
    assert!(driver.latest().await.is_none());

    let logs = driver.logs().await;
    assert_eq!(logs.len(), 2);
    assert!(logs[0].starts_with("[ERROR] Failed to fetch: "));
}

#[tokio::test]
async fn invalid_json_body_is_a_decode_failure() {
    let router = Router::new().route("/api/native", get(|| async { "not json" }));
    let addr = spawn(router).await;
    let driver = DemoDriver::new(format!("http://{addr}"));

    let outcome = driver.fetch_and_record(&descriptor("/api/native")).await;

    assert!(matches!(
        outcome,
        FetchOutcome::Failed(DriverError::Decode(_))
    ));
    assert!(!driver.is_pending().await);
}

#[tokio::test]
async fn failure_leaves_previous_result_untouched() {
    let router = Router::new()
        .route("/ok", get(|| async { Json(DemoPayload::new(&NATIVE)) }))
        .route("/bad", get(|| async { "not json" }));
    let addr = spawn(router).await;
    let driver = DemoDriver::new(format!("http://{addr}"));

    assert!(matches!(
        driver.fetch_and_record(&descriptor("/ok")).await,
        FetchOutcome::Completed(_)
    ));
    let before = driver.latest().await.unwrap();

    assert!(matches!(
        driver.fetch_and_record(&descriptor("/bad")).await,
        FetchOutcome::Failed(_)
    ));
    assert_eq!(driver.latest().await, Some(before));
}
