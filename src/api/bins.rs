use crate::api::ApiError;
use crate::api::domain::BinLocationGet;
use crate::api::map_bins::map_bin;
use crate::api::retry::with_retry;
use crate::app_config::AppConfig;
use crate::domain::PointOfInterest;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Fetches all bin locations in the order the backend delivers them. Items that cannot be placed are skipped.
#[instrument(skip(client, config))]
pub async fn get_bins(client: &Client, config: &AppConfig) -> Result<Vec<PointOfInterest>, ApiError> {
    info!("🗑️ Retrieving bins...");

    let url = &format!("{}/bins", config.backend().api_url());
    let response = with_retry(config, || async move {
        let response = client.get(url).send().await?.error_for_status()?;
        Ok::<_, ApiError>(response.json::<Vec<BinLocationGet>>().await?)
    })
    .await?;

    let received = response.len();
    let (bins, errors): (Vec<_>, Vec<_>) = response.into_iter().map(map_bin).partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        warn!("⚠️ Skipping bin: {}", error);
    }

    info!("🗑️ Retrieving bins... OK, {} received, {} skipped", received, errors.len());
    Ok(bins.into_iter().filter_map(Result::ok).collect())
}
