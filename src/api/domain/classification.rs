use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ClassifyWasteRequest<'a> {
    pub image_base64: &'a str,
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ClassificationGet {
    pub id: String,
    pub classification: String,
    pub category: String,
    pub suggestions: String,
    pub points_awarded: u32,
}
