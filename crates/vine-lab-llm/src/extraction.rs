//! Parameter extraction from LLM output.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use vine_lab_core::ParameterEntry;

/// Maximum amount of raw model output quoted in parse errors.
const ERROR_SNIPPET_LEN: usize = 200;

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Missing API credentials: set {0}")]
    MissingCredentials(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse model response ({context}): {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No data returned by the model")]
    EmptyResponse,

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Structured output returned by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionOutput {
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub test_date: Option<String>,
}

/// A raw name/value pair as emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawParameter {
    pub name: String,
    /// Usually a number, sometimes a numeric string ("1.36%")
    #[serde(default)]
    pub value: Value,
}

impl RawParameter {
    /// Numeric reading, if the value can be read as one.
    pub fn numeric_value(&self) -> Option<f64> {
        match &self.value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_numeric(s),
            _ => None,
        }
    }
}

fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse model output into the structured payload.
///
/// Tolerates Markdown code fences and prose around the JSON object.
pub fn parse_extraction_output(text: &str) -> ExtractionResult<ExtractionOutput> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::EmptyResponse);
    }

    let json_start = text.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat(format!("No JSON object found in response: {}", snippet(text)))
    })?;
    let json_end = text.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(ExtractionError::InvalidFormat(
            "Closing brace precedes opening brace".into(),
        ));
    }

    let json_slice = &text[json_start..=json_end];
    serde_json::from_str(json_slice).map_err(|source| ExtractionError::JsonParse {
        context: snippet(json_slice),
        source,
    })
}

/// Convert raw parameters to entries for the normalization pipeline.
///
/// Entries without a readable number are dropped.
pub fn to_parameter_entries(output: &ExtractionOutput) -> Vec<ParameterEntry> {
    output
        .parameters
        .iter()
        .filter_map(|p| match p.numeric_value() {
            Some(value) => Some(ParameterEntry::new(p.name.clone(), value)),
            None => {
                debug!(name = %p.name, value = %p.value, "skipping non-numeric parameter");
                None
            }
        })
        .collect()
}

fn snippet(text: &str) -> String {
    if text.chars().count() <= ERROR_SNIPPET_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(ERROR_SNIPPET_LEN).collect();
    format!("{cut}...")
}
