use crate::domain::GeoPoint;
use std::fmt::Display;

/// A physical waste receptacle as reported by the backend.
#[derive(Clone, PartialEq, Debug)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub category: BinCategory,
    pub position: GeoPoint,
    pub address: Option<String>,
    pub operating_hours: Option<String>,
    pub status: BinStatus,
    pub fill_level_percent: Option<u8>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinCategory {
    Recycling,
    Compost,
    EWaste,
    General,
}

impl BinCategory {
    /// Matches backend values case-insensitively, falling back to `General`.
    pub fn from_backend(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "recycling" => BinCategory::Recycling,
            "compost" => BinCategory::Compost,
            "e-waste" => BinCategory::EWaste,
            _ => BinCategory::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinCategory::Recycling => "recycling",
            BinCategory::Compost => "compost",
            BinCategory::EWaste => "e-waste",
            BinCategory::General => "general",
        }
    }
}

impl Display for BinCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum BinStatus {
    Active,
    Full,
    Maintenance,
    #[default]
    Unknown,
}

impl BinStatus {
    pub fn from_backend(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "active" => BinStatus::Active,
            "full" => BinStatus::Full,
            "maintenance" => BinStatus::Maintenance,
            _ => BinStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinStatus::Active => "active",
            BinStatus::Full => "full",
            BinStatus::Maintenance => "maintenance",
            BinStatus::Unknown => "unknown",
        }
    }

    /// Whether the bin currently accepts waste.
    pub fn accepts_waste(&self) -> bool {
        matches!(self, BinStatus::Active)
    }
}

impl Display for BinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("recycling", BinCategory::Recycling)]
    #[case("Compost", BinCategory::Compost)]
    #[case("E-WASTE", BinCategory::EWaste)]
    #[case("general", BinCategory::General)]
    #[case("hazardous", BinCategory::General)]
    #[case("", BinCategory::General)]
    fn category_from_backend(#[case] value: &str, #[case] expected: BinCategory) {
        assert_eq!(BinCategory::from_backend(value), expected);
    }

    #[rstest]
    #[case("active", BinStatus::Active)]
    #[case("FULL", BinStatus::Full)]
    #[case(" maintenance ", BinStatus::Maintenance)]
    #[case("closed", BinStatus::Unknown)]
    fn status_from_backend(#[case] value: &str, #[case] expected: BinStatus) {
        assert_eq!(BinStatus::from_backend(value), expected);
    }

    #[test]
    fn only_active_bins_accept_waste() {
        assert!(BinStatus::Active.accepts_waste());
        assert!(!BinStatus::Full.accepts_waste());
        assert!(!BinStatus::Unknown.accepts_waste());
    }
}
