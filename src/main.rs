use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kana_relay::{create_routes, romanize, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kana_relay=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Upstream translation endpoint: {}", config.upstream.base_url);

    let app_state = AppState::new(config.clone())?;

    // Dictionary loading takes a while; requests needing it get 503 until then
    app_state.romanizer.spawn_init(romanize::load_default);

    let app = create_routes(app_state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server running at http://{}", addr);
    info!("Serving static files from {}", config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
