use crate::api::ApiError;
use crate::api::retry::with_retry;
use crate::app_config::AppConfig;
use crate::domain::UserStats;
use reqwest::Client;
use tracing::{info, instrument};

#[instrument(skip(client, config))]
pub async fn get_user_stats(client: &Client, config: &AppConfig, user_id: &str) -> Result<UserStats, ApiError> {
    info!("⭐ Retrieving stats for '{}'...", user_id);

    let url = &format!("{}/user-stats/{}", config.backend().api_url(), user_id);
    let stats = with_retry(config, || async move {
        let response = client.get(url).send().await?.error_for_status()?;
        Ok::<_, ApiError>(response.json::<UserStats>().await?)
    })
    .await?;

    info!("⭐ Retrieving stats for '{}'... OK, {} points", user_id, stats.total_points);
    Ok(stats)
}
