//! promowatch
//!
//! A small daemon that polls the Epic Games storefront for free-game
//! promotions, normalizes the loosely-typed response into validated
//! promotion records, and prints the current set to stdout.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;

#[cfg(test)]
mod test_utils;


use adapters::{ConsoleSink, EpicStoreClient};
use app::WatchService;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,promowatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting promowatch...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let store = Arc::new(EpicStoreClient::new(
        config.store_api_url.clone(),
        config.locale.clone(),
        config.country.clone(),
    ));
    let sink = Arc::new(ConsoleSink);

    // Create the watch service and poll forever
    let service = WatchService::new(store, sink);

    tracing::info!(
        "Polling {} every {}s",
        config.store_api_url,
        config.poll_interval_secs
    );
    service.run(config.poll_interval()).await;

    Ok(())
}
