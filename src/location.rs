use crate::domain::GeoPoint;
use async_trait::async_trait;

/// Source of the device's current position.
///
/// `None` covers every reason a position is unavailable: permission denied, not yet resolved or a failed
/// acquisition. It is an expected state, not an error.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Option<GeoPoint>;
}

/// A provider that always reports the same position, or none.
#[derive(Clone, Copy, Default, Debug)]
pub struct FixedLocation(Option<GeoPoint>);

impl FixedLocation {
    pub fn new(position: Option<GeoPoint>) -> Self {
        FixedLocation(position)
    }

    pub fn unavailable() -> Self {
        FixedLocation(None)
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Option<GeoPoint> {
        self.0.filter(GeoPoint::is_valid)
    }
}
