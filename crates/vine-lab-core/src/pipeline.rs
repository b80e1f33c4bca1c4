//! Parameter normalization pipeline.
//!
//! Pipeline: raw entries → key cleanup → canonicalization → range correction → parameter map

use tracing::{debug, warn};

use crate::canonicalizer::Canonicalizer;
use crate::corrector::{check_value, RangeCheck};
use crate::keys::resolve_key;
use crate::models::{ParameterEntry, ParameterMap, TestType};

/// Turns extracted name/value pairs into a canonical parameter map.
pub struct ParameterPipeline<'a> {
    canonicalizer: &'a Canonicalizer,
    test_type: TestType,
}

impl<'a> ParameterPipeline<'a> {
    /// Create a pipeline for one test type.
    pub fn new(canonicalizer: &'a Canonicalizer, test_type: TestType) -> Self {
        Self {
            canonicalizer,
            test_type,
        }
    }

    /// Normalize a single entry into `(key, value)`.
    ///
    /// Returns `None` for non-finite values and names with no usable characters.
    pub fn normalize_entry(&self, entry: &ParameterEntry) -> Option<(String, RangeCheck)> {
        if !entry.value.is_finite() {
            debug!(name = %entry.name, "dropping non-finite value");
            return None;
        }

        let Some(key) = resolve_key(self.canonicalizer, &entry.name) else {
            debug!(name = %entry.name, "dropping entry with empty key");
            return None;
        };

        let check = check_value(key.as_str(), entry.value, self.test_type);
        match check {
            RangeCheck::ScaledUp { from, to } | RangeCheck::ScaledDown { from, to } => {
                debug!(key = key.as_str(), from, to, "corrected unit scale");
            }
            RangeCheck::OutOfRange { value, range } => {
                warn!(
                    key = key.as_str(),
                    value,
                    range = %range,
                    test_type = %self.test_type,
                    "value outside plausible range, kept for review"
                );
            }
            RangeCheck::Unregistered { .. } | RangeCheck::InRange { .. } => {}
        }

        Some((key.into_string(), check))
    }

    /// Normalize all entries. The first entry to claim a key wins.
    pub fn normalize_all(&self, entries: &[ParameterEntry]) -> ParameterMap {
        let mut parameters = ParameterMap::new();

        for entry in entries {
            let Some((key, check)) = self.normalize_entry(entry) else {
                continue;
            };
            if parameters.contains_key(&key) {
                debug!(key = %key, name = %entry.name, "duplicate parameter ignored");
                continue;
            }
            parameters.insert(key, check.value());
        }

        parameters
    }

    pub fn test_type(&self) -> TestType {
        self.test_type
    }
}

/// Normalize entries with the shared canonicalizer.
pub fn normalize_parameters(entries: &[ParameterEntry], test_type: TestType) -> ParameterMap {
    ParameterPipeline::new(Canonicalizer::global(), test_type).normalize_all(entries)
}
