mod bins;
mod classify;
mod client;
pub mod domain;
mod maintenance;
mod map_bins;
mod reports;
mod retry;
mod stats;

pub use bins::get_bins;
pub use classify::classify_waste;
pub use client::{ApiError, new_client};
pub use maintenance::{health, seed_data};
pub use map_bins::{MapBinError, map_bin};
pub use reports::{create_report, get_reports};
pub use stats::get_user_stats;
