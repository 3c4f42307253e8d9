use crate::domain::GeoPoint;
use chrono::{DateTime, Utc};

/// A waste spot the user wants to report.
#[derive(Clone, PartialEq, Debug)]
pub struct NewWasteReport {
    pub location: String,
    pub position: GeoPoint,
    pub description: String,
    pub image_base64: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct WasteReport {
    pub id: String,
    pub user_id: String,
    pub location: String,
    pub position: GeoPoint,
    pub description: String,
    pub status: ReportStatus,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    #[default]
    Unknown,
}

impl ReportStatus {
    pub fn from_backend(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "pending" => ReportStatus::Pending,
            "in_progress" => ReportStatus::InProgress,
            "resolved" => ReportStatus::Resolved,
            _ => ReportStatus::Unknown,
        }
    }
}
