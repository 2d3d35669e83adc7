use std::net::SocketAddr;

use tracing::info;

use routedemo_web::server::{DemoServer, DemoServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let addr: SocketAddr = std::env::var("ROUTEDEMO_WEB_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    info!("Starting RouteDemo endpoint service on http://{}", addr);

    DemoServer::new(DemoServerConfig::default()).serve(addr).await
}
