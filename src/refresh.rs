use crate::api::{ApiError, get_bins, get_user_stats, health, seed_data};
use crate::app_config::AppConfig;
use crate::domain::events::Event;
use crate::geo::{AnnotatedBins, annotate_bins};
use crate::location::LocationProvider;
use reqwest::Client;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tracing::{info, instrument, warn};

/// Checks the backend and seeds its sample bins when configured. Failures are logged and never stop startup.
#[instrument(skip_all)]
pub async fn prepare_backend(client: &Client, config: &AppConfig) {
    if let Err(err) = health(client, config).await {
        warn!("⚠️ Backend health check failed: {}", err);
    }

    if config.bins().seed_on_start() {
        if let Err(err) = seed_data(client, config).await {
            warn!("⚠️ Could not seed sample data: {}", err);
        }
    }
}

/// Runs one refresh cycle of the bin list.
///
/// The user's position is captured once, while the bins are being fetched, and every distance is computed
/// against that single value. A missing position only drops the distances, a failed fetch fails the cycle.
#[instrument(skip_all)]
pub async fn refresh_bins(client: &Client, config: &AppConfig, location: &dyn LocationProvider) -> Result<AnnotatedBins, ApiError> {
    let (position, bins) = tokio::join!(location.current_position(), get_bins(client, config));
    let bins = bins?;

    match position {
        Some(position) => info!(latitude = position.latitude, longitude = position.longitude, "📍 Using current position"),
        None => warn!("📍 Position unavailable, distances will not be shown"),
    }

    let annotated = annotate_bins(position, bins);
    if config.bins().sort_by_distance() {
        return Ok(annotated.sorted_by_distance());
    }
    Ok(annotated)
}

/// Reloads the configured user's stats into the store behind `tx`, flagging the store as loading meanwhile.
///
/// A failed load leaves the previously loaded stats in place.
#[instrument(skip_all)]
pub async fn refresh_user_stats(client: &Client, config: &AppConfig, tx: &Sender<Event>) -> Result<(), RefreshError> {
    tx.send(Event::LoadingChanged(true)).await?;
    let result = get_user_stats(client, config, config.backend().user_id()).await;
    tx.send(Event::LoadingChanged(false)).await?;

    tx.send(Event::UserStatsLoaded(result?)).await?;
    Ok(())
}

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("store is no longer listening: {0}")]
    StoreClosed(#[from] SendError<Event>),
}
