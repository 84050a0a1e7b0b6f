use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biblioteca_api=info,tower_http=info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("BIBLIOTECA_ADDR")
        .ok()
        .or_else(|| std::env::args().nth(1))
        .unwrap_or_else(|| "127.0.0.1:8000".to_string())
        .parse()?;

    biblioteca_api::interface::http::run(addr).await
}
