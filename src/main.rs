use cleancity::api;
use cleancity::app_config::AppConfig;
use cleancity::domain::events::Event;
use cleancity::location::FixedLocation;
use cleancity::refresh::{prepare_backend, refresh_bins, refresh_user_stats};
use cleancity::store::Store;
use cleancity::store_listener::store_listener;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = api::new_client(&config)?;

    prepare_backend(&client, &config).await;

    let (tx, rx) = mpsc::channel::<Event>(8);
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    let listener = task::spawn(async move {
        store_listener(notifier_rx).await;
    });
    let store_task = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let location = FixedLocation::new(config.location());
    let (stats, bins) = tokio::join!(refresh_user_stats(&client, &config, &tx), refresh_bins(&client, &config, &location));
    if let Err(err) = stats {
        warn!("⚠️ Could not load stats: {}", err);
    }

    let bins = bins?;
    if let Some(advisory) = bins.advisory() {
        warn!("📍 {}", advisory);
    }
    for entry in bins.entries() {
        let bin = &entry.bin;
        let distance = entry.distance.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        let fill_level = bin.fill_level_percent.map(|level| format!("{}%", level)).unwrap_or_else(|| "?".to_string());
        info!(
            bin_id = bin.id,
            "🗑️ {} [{}] {} | {} | {} | {} full | {}{}",
            bin.name,
            bin.category.as_str().to_uppercase(),
            distance,
            bin.address.as_deref().unwrap_or("-"),
            bin.operating_hours.as_deref().unwrap_or("-"),
            fill_level,
            bin.status,
            if bin.status.accepts_waste() { "" } else { ", not accepting waste" }
        );
    }

    drop(tx);
    store_task.await?;
    listener.await?;

    info!("🔥 {} refresh complete", env!("CARGO_PKG_NAME"));
    Ok(())
}
