use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    pub status: Option<String>,
}
