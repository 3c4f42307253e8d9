use serde::Deserialize;

/// A bin as returned by `GET /bins`. Every field is optional so a single incomplete item does not fail the list.
#[derive(Debug, Default, Deserialize)]
pub struct BinLocationGet {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub capacity: Option<i64>,
    pub timings: Option<String>,
}
