//! Unit-scale corrector.
//!
//! Extraction sometimes loses the scale of a reading: a ppm value printed
//! as a fraction, or "1.36%" read as `136`. When a value falls outside the
//! plausible range for its key, two fixed rescalings are tried:
//!
//! - `ppm` keys below `min` (and positive): multiply by 1000
//! - `%` keys above `max`: divide by 100
//!
//! A rescaling is accepted only if it lands inside the range. Anything else
//! is passed through untouched for human review, never clamped.

mod ranges;

pub use ranges::{range_for, ranges};

use serde::{Deserialize, Serialize};

use crate::models::{ParameterRange, TestType, Unit};

const PPM_SCALE_UP: f64 = 1000.0;
const PERCENT_SCALE_DOWN: f64 = 100.0;

/// Outcome of checking a value against its plausible range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum RangeCheck {
    /// No range registered for the key under this test type
    Unregistered { value: f64 },
    /// Already plausible
    InRange { value: f64 },
    /// ppm reading multiplied by 1000
    ScaledUp { from: f64, to: f64 },
    /// percent reading divided by 100
    ScaledDown { from: f64, to: f64 },
    /// Implausible and no rescaling helped
    OutOfRange { value: f64, range: ParameterRange },
}

impl RangeCheck {
    /// Value to keep after the check.
    pub fn value(&self) -> f64 {
        match *self {
            RangeCheck::Unregistered { value }
            | RangeCheck::InRange { value }
            | RangeCheck::OutOfRange { value, .. } => value,
            RangeCheck::ScaledUp { to, .. } | RangeCheck::ScaledDown { to, .. } => to,
        }
    }

    /// Whether a rescaling was applied.
    pub fn is_corrected(&self) -> bool {
        matches!(self, RangeCheck::ScaledUp { .. } | RangeCheck::ScaledDown { .. })
    }
}

/// Check a value against the range registered for `key`, applying a scale fix if one fits.
pub fn check_value(key: &str, value: f64, test_type: TestType) -> RangeCheck {
    let Some(range) = range_for(test_type, key) else {
        return RangeCheck::Unregistered { value };
    };
    check_against(range, value)
}

/// Check a value against an explicit range.
pub fn check_against(range: &ParameterRange, value: f64) -> RangeCheck {
    if range.contains(value) {
        return RangeCheck::InRange { value };
    }

    match range.unit {
        Unit::Ppm if value > 0.0 && value < range.min => {
            let scaled = value * PPM_SCALE_UP;
            if range.contains(scaled) {
                return RangeCheck::ScaledUp { from: value, to: scaled };
            }
        }
        Unit::Percent if value > range.max => {
            let scaled = value / PERCENT_SCALE_DOWN;
            if range.contains(scaled) {
                return RangeCheck::ScaledDown { from: value, to: scaled };
            }
        }
        _ => {}
    }

    RangeCheck::OutOfRange {
        value,
        range: *range,
    }
}

/// Return `value`, rescaled if it looks like a unit-scale mistake.
pub fn correct_value(key: &str, value: f64, test_type: TestType) -> f64 {
    check_value(key, value, test_type).value()
}
