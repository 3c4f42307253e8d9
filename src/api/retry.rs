use crate::api::ApiError;
use crate::app_config::AppConfig;
use std::future::Future;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::warn;

/// Runs `action`, retrying transient failures with exponential backoff as configured for the backend.
pub(crate) async fn with_retry<A, F, T>(config: &AppConfig, mut action: A) -> Result<T, ApiError>
where
    A: FnMut() -> F,
    F: Future<Output = Result<T, ApiError>>,
{
    let backend = config.backend();
    let strategy = ExponentialBackoff::from_millis(backend.retry_ms())
        .max_delay(backend.retry_max_delay())
        .map(jitter)
        .take(backend.retry_attempts());

    RetryIf::start(
        strategy,
        || {
            let attempt = action();
            async move {
                attempt.await.inspect_err(|error| {
                    if error.is_transient() {
                        warn!("⚠️ Backend request failed: {}. Retrying...", error);
                    }
                })
            }
        },
        |error: &ApiError| error.is_transient(),
    )
    .await
}
