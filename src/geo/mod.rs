mod annotate;
mod haversine;

pub use annotate::{AnnotatedBin, AnnotatedBins, DISTANCES_UNAVAILABLE_ADVISORY, annotate_bins};
pub use haversine::{EARTH_RADIUS_KM, estimate_distance_km};
