//! Extraction prompts and output schema for soil/petiole lab reports.

use serde_json::{json, Value};
use vine_lab_core::TestType;

/// Name attached to the structured-output schema.
pub const SCHEMA_NAME: &str = "lab_report_extraction";

/// System prompt for lab report extraction.
pub const SYSTEM_PROMPT: &str = r#"You are an agronomy lab assistant that reads vineyard soil and grape petiole test reports.

Extract every numeric test parameter exactly as printed on the report:
- name: The parameter name as printed (keep qualifiers such as "Available" or "NO3-N")
- value: The numeric result only, in the unit printed on the report

Rules:
- Do not convert units and do not guess missing values.
- Skip parameters whose result is not a number (e.g., texture class, "Low", "Nil").
- Use the report or sampling date for testDate (YYYY-MM-DD), or null if absent.
- confidence is your overall confidence in the extraction, between 0 and 1.

Return JSON only."#;

/// Parameters a report of the given type usually contains.
pub fn expected_parameters(test_type: TestType) -> &'static [&'static str] {
    match test_type {
        TestType::Soil => &[
            "pH",
            "Electrical Conductivity (EC)",
            "Organic Carbon",
            "Organic Matter",
            "Available Nitrogen (N)",
            "Available Phosphorus (P)",
            "Available Potassium (K)",
            "Calcium (Ca)",
            "Magnesium (Mg)",
            "Sulfur (S)",
            "Calcium Carbonate / Free Lime",
            "Iron (Fe)",
            "Manganese (Mn)",
            "Zinc (Zn)",
            "Copper (Cu)",
            "Boron (B)",
            "Molybdenum (Mo)",
            "Sodium (Na)",
            "Chloride (Cl)",
            "Carbonate (CO3)",
            "Bicarbonate (HCO3)",
        ],
        TestType::Petiole => &[
            "Total Nitrogen",
            "Nitrate Nitrogen (NO3-N)",
            "Ammonical Nitrogen (NH4-N)",
            "Phosphorus (P)",
            "Potassium (K)",
            "Calcium (Ca)",
            "Magnesium (Mg)",
            "Sulfur (S)",
            "Iron (Fe)",
            "Manganese (Mn)",
            "Zinc (Zn)",
            "Copper (Cu)",
            "Boron (B)",
            "Molybdenum (Mo)",
            "Sodium (Na)",
            "Chloride (Cl)",
        ],
    }
}

/// User prompt for extracting parameters from an attached report.
pub fn make_extraction_prompt(test_type: TestType) -> String {
    let expected = expected_parameters(test_type).join(", ");
    let nitrogen_note = match test_type {
        TestType::Petiole => {
            "\nKeep nitrogen fractions separate: total nitrogen, nitrate nitrogen and ammonical nitrogen are different parameters."
        }
        TestType::Soil => "",
    };

    format!(
        r#"The attached file is a grape {} test report.

Extract all numeric parameters. Typical parameters for this test: {}.{}

Return a JSON object with:
- parameters: array of {{"name", "value"}}
- summary: one or two sentences describing the overall result, or null
- notes: any remarks printed by the lab, or null
- confidence: number between 0 and 1, or null
- testDate: YYYY-MM-DD, or null"#,
        test_type, expected, nitrogen_note
    )
}

/// Strict JSON schema the model output must follow.
pub fn extraction_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["parameters", "summary", "notes", "confidence", "testDate"],
        "properties": {
            "parameters": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["name", "value"],
                    "properties": {
                        "name": { "type": "string" },
                        "value": { "type": "number" }
                    }
                }
            },
            "summary": { "type": ["string", "null"] },
            "notes": { "type": ["string", "null"] },
            "confidence": { "type": ["number", "null"] },
            "testDate": { "type": ["string", "null"] }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vine_lab_core::{resolve_key, Canonicalizer};

    #[test]
    fn test_expected_parameters_all_canonicalize() {
        let canonicalizer = Canonicalizer::new();
        for test_type in TestType::ALL {
            for name in expected_parameters(test_type) {
                let resolved = resolve_key(&canonicalizer, name);
                assert!(
                    resolved.as_ref().is_some_and(|k| k.is_canonical()),
                    "{test_type}: {name} resolved to {resolved:?}"
                );
            }
        }
    }

    #[test]
    fn test_extraction_prompt_mentions_test_type() {
        let prompt = make_extraction_prompt(TestType::Soil);
        assert!(prompt.contains("grape soil test report"));
        assert!(prompt.contains("Available Phosphorus"));
        assert!(!prompt.contains("nitrogen fractions"));
    }

    #[test]
    fn test_petiole_prompt_keeps_fractions_apart() {
        let prompt = make_extraction_prompt(TestType::Petiole);
        assert!(prompt.contains("grape petiole test report"));
        assert!(prompt.contains("NO3-N"));
        assert!(prompt.contains("nitrogen fractions separate"));
    }

    #[test]
    fn test_schema_requires_every_property() {
        let schema = extraction_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let properties = schema["properties"].as_object().unwrap();

        assert_eq!(required.len(), properties.len());
        for key in properties.keys() {
            assert!(required.contains(&key.as_str()), "{key} must be required in strict mode");
        }
    }
}
