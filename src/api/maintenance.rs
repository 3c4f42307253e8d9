use crate::api::ApiError;
use crate::api::domain::MessageResponse;
use crate::app_config::AppConfig;
use reqwest::Client;
use tracing::{info, instrument};

/// Checks that the backend is reachable, returning its status message.
#[instrument(skip(client, config))]
pub async fn health(client: &Client, config: &AppConfig) -> Result<MessageResponse, ApiError> {
    let response = client.get(format!("{}/", config.backend().api_url())).send().await?.error_for_status()?;
    let health = response.json::<MessageResponse>().await?;

    info!(status = ?health.status, "💚 {}", health.message);
    Ok(health)
}

/// Asks the backend to populate its sample bins. The backend ignores the call when bins already exist.
#[instrument(skip(client, config))]
pub async fn seed_data(client: &Client, config: &AppConfig) -> Result<String, ApiError> {
    info!("🌱 Seeding sample data...");

    let response = client.post(format!("{}/seed-data", config.backend().api_url())).send().await?.error_for_status()?;
    let seeded = response.json::<MessageResponse>().await?;

    info!("🌱 Seeding sample data... OK, {}", seeded.message);
    Ok(seeded.message)
}
