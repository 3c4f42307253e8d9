use crate::domain::{DistanceAnnotation, GeoPoint, PointOfInterest};
use crate::geo::estimate_distance_km;
use ordered_float::OrderedFloat;
use tracing::debug;

pub const DISTANCES_UNAVAILABLE_ADVISORY: &str = "Enable location to see distances to bins";

#[derive(Clone, PartialEq, Debug)]
pub struct AnnotatedBin {
    pub bin: PointOfInterest,
    pub distance: Option<DistanceAnnotation>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct AnnotatedBins {
    entries: Vec<AnnotatedBin>,
    distances_available: bool,
}

impl AnnotatedBins {
    pub fn entries(&self) -> &[AnnotatedBin] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distances_available(&self) -> bool {
        self.distances_available
    }

    /// Text to surface next to the list when no user position is known.
    pub fn advisory(&self) -> Option<&'static str> {
        (!self.distances_available).then_some(DISTANCES_UNAVAILABLE_ADVISORY)
    }

    /// Returns the bins ordered by ascending distance. The order is stable and entries without a distance stay last.
    pub fn sorted_by_distance(&self) -> AnnotatedBins {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|entry| match entry.distance {
            Some(distance) => (false, OrderedFloat(distance.kilometers())),
            None => (true, OrderedFloat(0.0)),
        });

        AnnotatedBins {
            entries,
            distances_available: self.distances_available,
        }
    }
}

/// Attaches the distance from `user` to every bin, keeping the order in which the bins were delivered.
///
/// `user` is captured once per refresh; without it every annotation is absent.
pub fn annotate_bins(user: Option<GeoPoint>, bins: Vec<PointOfInterest>) -> AnnotatedBins {
    let entries: Vec<AnnotatedBin> = bins
        .into_iter()
        .map(|bin| {
            let distance = user.map(|position| DistanceAnnotation::new(estimate_distance_km(&position, &bin.position)));
            AnnotatedBin { bin, distance }
        })
        .collect();

    debug!(bins = entries.len(), with_distance = user.is_some(), "📍 Annotated bins");

    AnnotatedBins {
        entries,
        distances_available: user.is_some(),
    }
}
