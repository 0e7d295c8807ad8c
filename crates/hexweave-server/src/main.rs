//! Hexweave server binary.

use hexweave_lattice::Lattice;
use hexweave_server::{build_router, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let lattice = Lattice::new(config.size, config.pattern)
        .expect("default lattice size is supported")
        .with_key_style(config.key_style);

    let app = build_router(Arc::new(Mutex::new(lattice)));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        size = config.size,
        pattern = %config.pattern,
        "hexweave server listening on http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await
}
