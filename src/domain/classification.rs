use std::fmt::Display;

#[derive(Clone, PartialEq, Debug)]
pub struct ClassificationResult {
    pub id: String,
    pub classification: String,
    pub category: WasteCategory,
    pub suggestions: String,
    pub points_awarded: u32,
}

/// Disposal category assigned by the classifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum WasteCategory {
    Recycle,
    Compost,
    Landfill,
}

impl WasteCategory {
    pub fn from_backend(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "RECYCLE" => WasteCategory::Recycle,
            "COMPOST" => WasteCategory::Compost,
            _ => WasteCategory::Landfill,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteCategory::Recycle => "RECYCLE",
            WasteCategory::Compost => "COMPOST",
            WasteCategory::Landfill => "LANDFILL",
        }
    }
}

impl Display for WasteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("RECYCLE", WasteCategory::Recycle)]
    #[case("compost", WasteCategory::Compost)]
    #[case("LANDFILL", WasteCategory::Landfill)]
    #[case("[RECYCLE/COMPOST/LANDFILL]", WasteCategory::Landfill)]
    fn from_backend(#[case] value: &str, #[case] expected: WasteCategory) {
        assert_eq!(WasteCategory::from_backend(value), expected);
    }
}
