use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

pub fn new_client(config: &AppConfig) -> Result<Client, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(header::USER_AGENT, HeaderValue::from_str(&format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))?);

    let client = Client::builder().timeout(config.backend().timeout()).default_headers(headers).build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

impl ApiError {
    /// Whether repeating the request may succeed: timeouts, connection failures and server errors.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::RequestError(error) => error.is_timeout() || error.is_connect() || error.status().is_some_and(|status| status.is_server_error()),
            ApiError::InvalidHeaderValue(_) => false,
        }
    }
}
