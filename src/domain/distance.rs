use std::fmt::Display;

/// Distance between the user and a point of interest, derived at read time.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct DistanceAnnotation {
    kilometers: f64,
}

impl DistanceAnnotation {
    pub const fn new(kilometers: f64) -> Self {
        DistanceAnnotation { kilometers }
    }

    pub fn kilometers(&self) -> f64 {
        self.kilometers
    }

    /// Kilometers rounded to one decimal place, rounding the exact value and breaking exact ties away from zero.
    pub fn rounded_kilometers(&self) -> f64 {
        let kilometers = self.kilometers;
        // Only odd multiples of 0.25 sit exactly halfway between two tenths. Scaling them by ten is exact.
        let quarters = kilometers * 4.0;
        if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
            return (kilometers * 10.0).round() / 10.0;
        }
        format!("{:.1}", kilometers).parse().unwrap_or(kilometers)
    }
}

impl Display for DistanceAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.rounded_kilometers())
    }
}
