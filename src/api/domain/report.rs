use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct WasteReportPost<'a> {
    pub location: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<&'a str>,
    pub user_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct WasteReportGet {
    pub id: String,
    pub user_id: Option<String>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub status: Option<String>,
    pub timestamp: Option<String>,
}
