use std::net::SocketAddr;

use anyhow::Context;

use oauth_console::relay::{router, RelayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let addr: SocketAddr = std::env::var("RELAY_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3001".to_string())
        .parse()
        .context("RELAY_ADDR is not a valid socket address")?;
    let environment = std::env::var("RELAY_ENV").unwrap_or_else(|_| "development".to_string());

    log::info!("Starting proxy relay ({}) on {}", environment, addr);

    let app = router(RelayState::new(environment));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind relay address")?;
    axum::serve(listener, app)
        .await
        .context("relay server exited")?;

    Ok(())
}
