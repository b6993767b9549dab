// Portfolio server entry point
//
// Usage: cargo run --bin portfolio_server
// Configuration comes from HOST, PORT, ASSETS_DIR, PAGE_CACHE_TTL_SECS and
// PAGE_CACHE_CAPACITY.

use portfolio_site::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "portfolio_site=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio server...");

    let config = SiteConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  ASSETS_DIR: {}", config.assets_dir.display());
    tracing::info!("  PAGE_CACHE_TTL: {:?}", config.page_cache_ttl);
    tracing::info!("  PAGE_CACHE_CAPACITY: {}", config.page_cache_capacity);

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
