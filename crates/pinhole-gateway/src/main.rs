use clap::Parser;
use pinhole_cache::MokaLookupCache;
use pinhole_gateway::app::App;
use pinhole_gateway::cli::CLI;
use pinhole_gateway::state::AppState;
use pinhole_generator::RandomGenerator;
use pinhole_shortener::{ShortenerConfig, ShortenerService};
use pinhole_store::InMemoryStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        cache_duration_hours = config.cache_duration_hours,
        "starting gateway server"
    );

    // Components are built once here and owned for the process lifetime.
    let shortener = ShortenerService::new(
        InMemoryStore::new(),
        MokaLookupCache::with_ttl(
            config.cache_capacity,
            Duration::from_secs(config.cache_duration_hours * 60 * 60),
        ),
        RandomGenerator::new(),
        ShortenerConfig::builder()
            .base_url(config.public_base_url)
            .build(),
    );

    let state = AppState::new(Arc::new(shortener));
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
