//! Plausible-range models for lab parameters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reporting unit of a lab parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Unit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "ppm")]
    Ppm,
    /// pH, EC and other unit-less readings
    #[serde(rename = "")]
    Dimensionless,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Ppm => "ppm",
            Unit::Dimensionless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Physiologically plausible bounds for a parameter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ParameterRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Unit the bounds are expressed in
    pub unit: Unit,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, unit: Unit) -> Self {
        Self { min, max, unit }
    }

    /// Check whether a value lies inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for ParameterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)?;
        if self.unit != Unit::Dimensionless {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}
