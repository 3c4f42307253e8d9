pub mod badge;
mod bin;
mod classification;
mod distance;
pub mod events;
mod geo_point;
mod report;
mod stats;

pub use badge::{Badge, BadgeProgress};
pub use bin::{BinCategory, BinStatus, PointOfInterest};
pub use classification::{ClassificationResult, WasteCategory};
pub use distance::DistanceAnnotation;
pub use geo_point::GeoPoint;
pub use report::{NewWasteReport, ReportStatus, WasteReport};
pub use stats::UserStats;
