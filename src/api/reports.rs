use crate::api::ApiError;
use crate::api::domain::{WasteReportGet, WasteReportPost};
use crate::api::retry::with_retry;
use crate::app_config::AppConfig;
use crate::domain::{GeoPoint, NewWasteReport, ReportStatus, WasteReport};
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Reports a waste spot for the configured user. The backend awards points for every report.
#[instrument(skip(client, config, report), fields(location = %report.location))]
pub async fn create_report(client: &Client, config: &AppConfig, report: &NewWasteReport) -> Result<WasteReport, ApiError> {
    info!("📝 Creating report...");

    let request = WasteReportPost {
        location: &report.location,
        latitude: report.position.latitude,
        longitude: report.position.longitude,
        description: &report.description,
        image_base64: report.image_base64.as_deref(),
        user_id: config.backend().user_id(),
    };
    let response = client
        .post(format!("{}/reports", config.backend().api_url()))
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    let created = map_report(response.json::<WasteReportGet>().await?);
    info!("📝 Creating report... OK, '{}'", created.id);
    Ok(created)
}

/// Fetches the most recent reports, newest first.
#[instrument(skip(client, config))]
pub async fn get_reports(client: &Client, config: &AppConfig) -> Result<Vec<WasteReport>, ApiError> {
    info!("📝 Retrieving reports...");

    let url = &format!("{}/reports", config.backend().api_url());
    let reports = with_retry(config, || async move {
        let response = client.get(url).send().await?.error_for_status()?;
        Ok::<_, ApiError>(response.json::<Vec<WasteReportGet>>().await?)
    })
    .await?;

    let reports: Vec<WasteReport> = reports.into_iter().map(map_report).collect();
    info!("📝 Retrieving reports... OK, {} found", reports.len());
    Ok(reports)
}

fn map_report(report: WasteReportGet) -> WasteReport {
    WasteReport {
        timestamp: report.timestamp.as_deref().and_then(parse_timestamp),
        id: report.id,
        user_id: report.user_id.unwrap_or_default(),
        location: report.location,
        position: GeoPoint::new(report.latitude, report.longitude),
        description: report.description,
        status: report.status.as_deref().map(ReportStatus::from_backend).unwrap_or_default(),
    }
}

/// Parses RFC 3339 timestamps as well as the naive UTC timestamps the backend emits.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(timestamp) => Some(timestamp.and_utc()),
        Err(err) => {
            warn!("⚠️ Ignoring unparsable report timestamp '{}': {}", value, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::TimeZone;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[tokio::test]
    async fn create_report_posts_the_report_for_the_configured_user() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/api/reports")
            .match_body(Matcher::Json(json!({
                "location": "Prospect Park entrance",
                "latitude": 40.6602,
                "longitude": -73.969,
                "description": "Dumped furniture",
                "user_id": "default_user"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "r-1",
                    "user_id": "default_user",
                    "location": "Prospect Park entrance",
                    "latitude": 40.6602,
                    "longitude": -73.969,
                    "description": "Dumped furniture",
                    "image_base64": null,
                    "status": "pending",
                    "timestamp": "2024-05-04T09:30:15"
                }"#,
            )
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let report = NewWasteReport {
            location: "Prospect Park entrance".to_string(),
            position: GeoPoint::new(40.6602, -73.969),
            description: "Dumped furniture".to_string(),
            image_base64: None,
        };

        let created = create_report(&Client::new(), &config, &report).await?;

        mock.assert_async().await;
        assert_eq!(
            created,
            WasteReport {
                id: "r-1".to_string(),
                user_id: "default_user".to_string(),
                location: "Prospect Park entrance".to_string(),
                position: GeoPoint::new(40.6602, -73.969),
                description: "Dumped furniture".to_string(),
                status: ReportStatus::Pending,
                timestamp: Some(Utc.with_ymd_and_hms(2024, 5, 4, 9, 30, 15).unwrap()),
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_reports_returns_mapped_reports() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/reports")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/reports_response.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().backend_url(server.url()).build();
        let reports = get_reports(&Client::new(), &config).await?;

        mock.assert_async().await;
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].status, ReportStatus::Pending);
        assert_eq!(reports[1].status, ReportStatus::Resolved);
        assert_eq!(reports[1].timestamp, Some(Utc.with_ymd_and_hms(2024, 5, 1, 17, 2, 0).unwrap()));

        Ok(())
    }

    #[rstest]
    #[case("2024-05-01T17:02:00Z", Some(Utc.with_ymd_and_hms(2024, 5, 1, 17, 2, 0).unwrap()))]
    #[case("2024-05-01T19:02:00+02:00", Some(Utc.with_ymd_and_hms(2024, 5, 1, 17, 2, 0).unwrap()))]
    #[case("2024-05-01T17:02:00", Some(Utc.with_ymd_and_hms(2024, 5, 1, 17, 2, 0).unwrap()))]
    #[case("yesterday", None)]
    fn parses_timestamps(#[case] value: &str, #[case] expected: Option<DateTime<Utc>>) {
        assert_eq!(parse_timestamp(value), expected);
    }
}
