//! End-to-end harness for the RouteDemo endpoint service.

use std::net::SocketAddr;

use routedemo_web::server::{DemoServer, DemoServerConfig};

/// Boot the real demo server on an ephemeral port and return its address.
pub async fn spawn_demo_server() -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = DemoServer::new(DemoServerConfig::default());
    tokio::spawn(async move {
        let _ = axum::serve(listener, server.router()).await;
    });
    Ok(addr)
}
