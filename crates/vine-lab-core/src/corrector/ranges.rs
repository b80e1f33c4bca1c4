//! Plausible value ranges per test type.
//!
//! Soil macro/micronutrients are reported as available ppm (mg/kg);
//! petiole macronutrients as % dry weight and micronutrients as ppm.

use crate::models::{ParameterRange, TestType, Unit};

const fn pct(min: f64, max: f64) -> ParameterRange {
    ParameterRange::new(min, max, Unit::Percent)
}

const fn ppm(min: f64, max: f64) -> ParameterRange {
    ParameterRange::new(min, max, Unit::Ppm)
}

const fn plain(min: f64, max: f64) -> ParameterRange {
    ParameterRange::new(min, max, Unit::Dimensionless)
}

pub(crate) const SOIL_RANGES: &[(&str, ParameterRange)] = &[
    ("ph", plain(3.0, 10.5)),
    ("ec", plain(0.01, 20.0)),
    ("organicCarbon", pct(0.05, 10.0)),
    ("organicMatter", pct(0.1, 20.0)),
    ("nitrogen", ppm(10.0, 1500.0)),
    ("phosphorus", ppm(0.5, 500.0)),
    ("potassium", ppm(10.0, 3000.0)),
    ("calcium", ppm(50.0, 15000.0)),
    ("magnesium", ppm(10.0, 3000.0)),
    ("sulfur", ppm(1.0, 500.0)),
    ("calciumCarbonate", pct(0.0, 60.0)),
    ("iron", ppm(0.5, 500.0)),
    ("manganese", ppm(0.5, 300.0)),
    ("zinc", ppm(0.1, 100.0)),
    ("copper", ppm(0.1, 100.0)),
    ("boron", ppm(0.05, 20.0)),
    ("molybdenum", ppm(0.01, 5.0)),
    ("sodium", ppm(5.0, 5000.0)),
    ("chloride", ppm(5.0, 5000.0)),
    ("carbonate", ppm(0.0, 1000.0)),
    ("bicarbonate", ppm(5.0, 3000.0)),
];

pub(crate) const PETIOLE_RANGES: &[(&str, ParameterRange)] = &[
    ("nitrogen", pct(0.3, 6.0)),
    ("total_nitrogen", pct(0.3, 6.0)),
    ("nitrate_nitrogen", ppm(50.0, 10000.0)),
    ("ammonical_nitrogen", ppm(20.0, 5000.0)),
    ("phosphorus", pct(0.05, 1.5)),
    ("potassium", pct(0.3, 6.0)),
    ("calcium", pct(0.3, 4.0)),
    ("magnesium", pct(0.1, 2.0)),
    ("sulfur", pct(0.05, 1.0)),
    ("iron", ppm(10.0, 1000.0)),
    ("manganese", ppm(10.0, 2000.0)),
    ("zinc", ppm(5.0, 500.0)),
    ("copper", ppm(2.0, 500.0)),
    ("boron", ppm(5.0, 200.0)),
    ("molybdenum", ppm(0.05, 10.0)),
    ("sodium", pct(0.01, 1.0)),
    ("chloride", pct(0.05, 2.0)),
];

/// Registered range for a canonical key under a test type.
pub fn range_for(test_type: TestType, key: &str) -> Option<&'static ParameterRange> {
    ranges(test_type)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, range)| range)
}

/// Full range table for a test type.
pub fn ranges(test_type: TestType) -> &'static [(&'static str, ParameterRange)] {
    match test_type {
        TestType::Soil => SOIL_RANGES,
        TestType::Petiole => PETIOLE_RANGES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonicalizer::CANONICAL_KEYS;

    #[test]
    fn test_range_invariants() {
        for test_type in TestType::ALL {
            for (key, range) in ranges(test_type) {
                assert!(range.min < range.max, "{test_type}/{key}: min must be below max");
                assert!(CANONICAL_KEYS.contains(key), "{test_type}/{key} is not canonical");
            }
        }
    }

    #[test]
    fn test_range_lookup_is_type_sensitive() {
        let soil = range_for(TestType::Soil, "phosphorus").unwrap();
        let petiole = range_for(TestType::Petiole, "phosphorus").unwrap();
        assert_eq!(soil.unit, Unit::Ppm);
        assert_eq!(petiole.unit, Unit::Percent);

        assert!(range_for(TestType::Soil, "total_nitrogen").is_none());
        assert!(range_for(TestType::Petiole, "ph").is_none());
    }
}
