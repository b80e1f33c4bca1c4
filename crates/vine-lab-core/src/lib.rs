//! Vine-Lab Core Library
//!
//! Normalization of soil and petiole laboratory reports for grape growers.
//!
//! # Architecture
//!
//! ```text
//! Uploaded report → AI extraction (vine-lab-llm) → raw name/value pairs
//!                                                        │
//!                                                  Key cleanup
//!                                     (slugify, strip _as_<symbol>, _ppm, ...)
//!                                                        │
//!                                                Canonicalization
//!                                        ("Soil pH" → ph, "NO3-N" → nitrate_nitrogen)
//!                                                        │
//!                                                Range correction
//!                                       (ppm ×1000 / percent ÷100 when implausible)
//!                                                        │
//!                                               ParsedReport.parameters
//! ```
//!
//! Alias and range tables are immutable and shared; every call is pure.
//!
//! # Modules
//!
//! - [`models`]: Domain types (TestType, ParameterRange, ParsedReport, ...)
//! - [`canonicalizer`]: Alias table and name canonicalization
//! - [`corrector`]: Range table and unit-scale correction
//! - [`keys`]: Slugifying and candidate key generation
//! - [`pipeline`]: Entry list → canonical parameter map

pub mod canonicalizer;
pub mod corrector;
pub mod keys;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use canonicalizer::{canonicalize, normalize_alias, Canonicalizer, CANONICAL_KEYS};
pub use corrector::{check_value, correct_value, range_for, RangeCheck};
pub use keys::{key_candidates, resolve_key, slugify, ResolvedKey};
pub use models::{ParameterEntry, ParameterMap, ParameterRange, ParsedReport, TestType, Unit};
pub use pipeline::{normalize_parameters, ParameterPipeline};

/// Core errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown test type: {0} (expected \"soil\" or \"petiole\")")]
    UnknownTestType(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
