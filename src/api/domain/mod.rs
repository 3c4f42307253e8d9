mod bin_location_get;
mod classification;
mod message;
mod report;

pub use bin_location_get::BinLocationGet;
pub use classification::{ClassificationGet, ClassifyWasteRequest};
pub use message::MessageResponse;
pub use report::{WasteReportGet, WasteReportPost};
