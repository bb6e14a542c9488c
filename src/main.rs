use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::AppConfig;
use mergington_activities::database::{seed, ActivityStore};
use mergington_activities::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 2. Config + seed roster
    let config = AppConfig::from_env().context("invalid configuration")?;
    let activities = match &config.seed_file {
        Some(path) => seed::load_seed_file(path)?,
        None => seed::default_activities(),
    };
    let store = ActivityStore::new(activities);
    if store.is_empty() {
        warn!("Seed roster is empty; no activities can be signed up for");
    }
    info!(activities = store.len(), "activity store seeded");

    let app = web::router(store, &config.static_dir);

    // 3. Bind, with a fallback port
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "Could not bind {}: {}. Trying fallback {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            tokio::net::TcpListener::bind(config.fallback_bind_addr())
                .await
                .with_context(|| format!("could not bind {}", config.fallback_bind_addr()))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
