use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

mod cache;
mod config;
mod report;
mod resolve;
mod vrml;

use config::Config;
use vrml::VrmlClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let args = config.resolve()?;

    // Pipeline: locate → fetch-or-load → resolve → print.
    let snapshot = match cache::find_cached(&config.cache_dir, args.game)? {
        Some(path) if !args.force_fetch => {
            info!("Using cached snapshot {}", path.display());
            cache::load_snapshot(&path)?
        }
        found => {
            if found.is_none() && !args.force_fetch {
                warn!(
                    "No cached file found for game '{}'. Fetching new data...",
                    args.game
                );
            }
            let client = VrmlClient::new(
                &config.api_url,
                Duration::from_secs(config.http_timeout_secs),
            )?;
            let snapshot = vrml::build_snapshot(&client, args.game).await;
            let path = cache::write_snapshot(&config.cache_dir, args.game, &snapshot)?;
            info!("Snapshot written to {}", path.display());
            snapshot
        }
    };

    info!("Checking {} players for votes", snapshot.len());

    let results = resolve::resolve_match(&snapshot, &args.match_id);
    report::print_report(&snapshot, &results);

    Ok(())
}
