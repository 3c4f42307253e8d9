use crate::domain::GeoPoint;
use config::Config;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    backend: Backend,
    location: Option<GeoPoint>,
    #[serde(default)]
    bins: Bins,
}

impl AppConfig {
    /// Loads `config.toml`, then the optional `config_local.toml`, then `CLEANCITY__`-prefixed environment variables.
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("CLEANCITY").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// The configured device position, if any.
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn bins(&self) -> &Bins {
        &self.bins
    }
}

#[derive(Debug, Deserialize)]
pub struct Backend {
    url: String,
    #[serde(default = "default_user_id")]
    user_id: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    #[serde(with = "humantime_serde")]
    retry_max_delay: Duration,
    retry_attempts: usize,
}

fn default_user_id() -> String {
    "default_user".to_string()
}

impl Backend {
    /// Base URL of the REST API, without a trailing slash.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.url.trim_end_matches('/'))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        self.retry_max_delay
    }

    pub fn retry_attempts(&self) -> usize {
        self.retry_attempts
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Bins {
    #[serde(default)]
    sort_by_distance: bool,
    #[serde(default)]
    seed_on_start: bool,
}

impl Bins {
    pub fn sort_by_distance(&self) -> bool {
        self.sort_by_distance
    }

    pub fn seed_on_start(&self) -> bool {
        self.seed_on_start
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                backend: Backend {
                    url: "http://localhost:3000".to_string(),
                    user_id: "default_user".to_string(),
                    timeout: Duration::from_secs(5),
                    retry_ms: 1,
                    retry_max_delay: Duration::from_millis(5),
                    retry_attempts: 2,
                },
                location: None,
                bins: Bins::default(),
            },
        }
    }

    pub fn backend_url(mut self, url: String) -> Self {
        self.config.backend.url = url;
        self
    }

    pub fn user_id(mut self, user_id: &str) -> Self {
        self.config.backend.user_id = user_id.to_string();
        self
    }

    pub fn retry_attempts(mut self, retry_attempts: usize) -> Self {
        self.config.backend.retry_attempts = retry_attempts;
        self
    }

    pub fn location(mut self, location: GeoPoint) -> Self {
        self.config.location = Some(location);
        self
    }

    pub fn sort_by_distance(mut self, sort_by_distance: bool) -> Self {
        self.config.bins.sort_by_distance = sort_by_distance;
        self
    }

    pub fn seed_on_start(mut self, seed_on_start: bool) -> Self {
        self.config.bins.seed_on_start = seed_on_start;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
