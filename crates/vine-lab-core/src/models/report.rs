//! Lab report models: raw parameter entries and the parsed result.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A parameter name/value pair as extracted from a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterEntry {
    /// Parameter name as printed by the lab (e.g., "Soil pH")
    pub name: String,
    /// Numeric reading
    pub value: f64,
}

impl ParameterEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Canonical key → finite reading.
pub type ParameterMap = BTreeMap<String, f64>;

/// Structured result handed back to the caller for persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    pub parameters: ParameterMap,
    pub summary: Option<String>,
    pub raw_notes: Option<String>,
    /// Extraction confidence in `[0, 1]`
    pub confidence: Option<f64>,
    /// Sampling/report date, `YYYY-MM-DD`
    pub test_date: Option<String>,
}

impl ParsedReport {
    /// Build a report, dropping blank text, out-of-domain confidence and unparseable dates.
    pub fn new(
        parameters: ParameterMap,
        summary: Option<String>,
        raw_notes: Option<String>,
        confidence: Option<f64>,
        test_date: Option<String>,
    ) -> Self {
        Self {
            parameters,
            summary: non_blank(summary),
            raw_notes: non_blank(raw_notes),
            confidence: confidence
                .filter(|c| c.is_finite())
                .map(|c| c.clamp(0.0, 1.0)),
            test_date: test_date.as_deref().and_then(normalize_test_date),
        }
    }

    /// Look up a parameter by canonical key.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.parameters.get(key).copied()
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Accept a zero-padded `YYYY-MM-DD` calendar date; anything else is `None`.
pub fn normalize_test_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
    let formatted = date.format("%Y-%m-%d").to_string();
    // chrono accepts "2024-3-5"; only the padded form is kept.
    (formatted == trimmed).then_some(formatted)
}
