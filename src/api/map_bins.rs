use crate::api::domain::BinLocationGet;
use crate::domain::{BinCategory, BinStatus, GeoPoint, PointOfInterest};
use thiserror::Error;

pub fn map_bin(bin: BinLocationGet) -> Result<PointOfInterest, MapBinError> {
    let id = bin.id.filter(|id| !id.is_empty()).ok_or(MapBinError::MissingId)?;

    let position = match (bin.latitude, bin.longitude) {
        (Some(latitude), Some(longitude)) => GeoPoint::new(latitude, longitude),
        _ => return Err(MapBinError::MissingPosition { bin_id: id }),
    };
    if !position.is_valid() {
        return Err(MapBinError::InvalidPosition { bin_id: id, position });
    }

    Ok(PointOfInterest {
        id,
        name: bin.name.unwrap_or_default(),
        category: bin.r#type.as_deref().map(BinCategory::from_backend).unwrap_or(BinCategory::General),
        position,
        address: bin.address,
        operating_hours: bin.timings,
        status: bin.status.as_deref().map(BinStatus::from_backend).unwrap_or_default(),
        fill_level_percent: bin.capacity.map(|capacity| capacity.clamp(0, 100) as u8),
    })
}

#[derive(Error, Debug, PartialEq)]
pub enum MapBinError {
    #[error("bin without an id")]
    MissingId,
    #[error("bin '{bin_id}' has no position")]
    MissingPosition { bin_id: String },
    #[error("bin '{bin_id}' has an invalid position {position:?}")]
    InvalidPosition { bin_id: String, position: GeoPoint },
}
