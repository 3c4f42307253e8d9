use crate::api::ApiError;
use crate::api::domain::{ClassificationGet, ClassifyWasteRequest};
use crate::app_config::AppConfig;
use crate::domain::{ClassificationResult, WasteCategory};
use reqwest::Client;
use tracing::{info, instrument};

/// Sends a base64 encoded photo to the backend classifier. Not retried, as every call awards points.
#[instrument(skip_all)]
pub async fn classify_waste(client: &Client, config: &AppConfig, image_base64: &str) -> Result<ClassificationResult, ApiError> {
    info!("📷 Classifying waste...");

    let request = ClassifyWasteRequest {
        image_base64,
        user_id: config.backend().user_id(),
    };
    let response = client
        .post(format!("{}/classify-waste", config.backend().api_url()))
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    let classification = response.json::<ClassificationGet>().await?;
    let result = ClassificationResult {
        id: classification.id,
        classification: classification.classification,
        category: WasteCategory::from_backend(&classification.category),
        suggestions: classification.suggestions,
        points_awarded: classification.points_awarded,
    };

    info!("📷 Classifying waste... OK, '{}' ({}), +{} points", result.classification, result.category, result.points_awarded);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn classify_waste_posts_the_image_for_the_configured_user() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/classify-waste")
            .match_body(Matcher::Json(json!({ "image_base64": "aGVsbG8=", "user_id": "alice" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "c-1",
                    "classification": "Plastic bottle",
                    "category": "RECYCLE",
                    "suggestions": "Rinse and place in the recycling bin.",
                    "points_awarded": 10
                }"#,
            )
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).user_id("alice").build();
        let result = classify_waste(&Client::new(), &config, "aGVsbG8=").await?;

        mock.assert_async().await;
        assert_eq!(
            result,
            ClassificationResult {
                id: "c-1".to_string(),
                classification: "Plastic bottle".to_string(),
                category: WasteCategory::Recycle,
                suggestions: "Rinse and place in the recycling bin.".to_string(),
                points_awarded: 10,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn classify_waste_is_not_retried() {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("POST", "/api/classify-waste").with_status(500).expect(1).create_async().await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let result = classify_waste(&Client::new(), &config, "aGVsbG8=").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }
}
