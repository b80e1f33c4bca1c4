//! End-to-end report parsing against the mock backend.

use vine_lab_core::{Canonicalizer, TestType};
use vine_lab_llm::{ExtractionError, MockBackend, ReportFile, ReportParser};

fn pdf() -> ReportFile {
    ReportFile::new("soil-report.pdf", "application/pdf", b"%PDF-1.4".to_vec()).unwrap()
}

#[tokio::test]
async fn test_soil_report_end_to_end() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[{"name":"Soil pH","value":7.2},{"name":"Available Nitrogen","value":250}],
            "summary":"Slightly alkaline, medium nitrogen","notes":null,"confidence":0.88,"testDate":"2024-11-02"}"#,
    );
    let parser = ReportParser::new(backend);

    let report = parser.parse_report(&pdf(), TestType::Soil).await.unwrap();

    assert_eq!(report.parameters.len(), 2);
    assert_eq!(report.get("ph"), Some(7.2));
    assert_eq!(report.get("nitrogen"), Some(250.0));
    assert_eq!(report.summary.as_deref(), Some("Slightly alkaline, medium nitrogen"));
    assert!(report.raw_notes.is_none());
    assert_eq!(report.confidence, Some(0.88));
    assert_eq!(report.test_date.as_deref(), Some("2024-11-02"));

    parser.wait_for_cleanup().await;
    assert_eq!(parser.backend().uploads(), vec!["soil-report.pdf".to_string()]);
    assert_eq!(parser.backend().deletes(), vec!["file-mock-1".to_string()]);
}

#[tokio::test]
async fn test_unmapped_parameter_passthrough() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[{"name":"Some Unmapped Nutrient","value":5}],"summary":null,"notes":null,"confidence":null,"testDate":null}"#,
    );
    let parser = ReportParser::new(backend);

    let report = parser.parse_report(&pdf(), TestType::Soil).await.unwrap();

    assert_eq!(report.get("some_unmapped_nutrient"), Some(5.0));
    assert!(report.confidence.is_none());
    assert!(report.test_date.is_none());
}

#[tokio::test]
async fn test_petiole_corrections_and_duplicates() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[
            {"name":"Total Nitrogen (%)","value":136},
            {"name":"Nitrate Nitrogen ppm","value":920},
            {"name":"Ammonical Nitrogen","value":"310"},
            {"name":"Total N","value":1.1},
            {"name":"Boron","value":0.04}
        ],"summary":null,"notes":"Sampled at bloom","confidence":0.7,"testDate":"15/03/2024"}"#,
    );
    let parser = ReportParser::new(backend);

    let report = parser.parse_report(&pdf(), TestType::Petiole).await.unwrap();

    assert!((report.get("total_nitrogen").unwrap() - 1.36).abs() < 1e-9);
    assert_eq!(report.get("nitrate_nitrogen"), Some(920.0));
    assert_eq!(report.get("ammonical_nitrogen"), Some(310.0));
    assert!((report.get("boron").unwrap() - 40.0).abs() < 1e-9);
    assert!(report.get("nitrogen").is_none());
    assert_eq!(report.parameters.len(), 4);
    assert_eq!(report.raw_notes.as_deref(), Some("Sampled at bloom"));
    // Not YYYY-MM-DD
    assert!(report.test_date.is_none());

    let prompts = parser.backend().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("petiole"));
}

#[tokio::test]
async fn test_custom_canonicalizer() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[{"name":"Mehlich-3 P","value":35}],"summary":null,"notes":null,"confidence":null,"testDate":null}"#,
    );
    let parser = ReportParser::new(backend)
        .with_canonicalizer(Canonicalizer::new().with_alias("Mehlich 3 P", "phosphorus"));

    let report = parser.parse_report(&pdf(), TestType::Soil).await.unwrap();

    assert_eq!(report.get("phosphorus"), Some(35.0));
}

#[tokio::test]
async fn test_empty_response_is_error_and_file_cleaned_up() {
    let parser = ReportParser::new(MockBackend::with_output("  "));

    let err = parser.parse_report(&pdf(), TestType::Soil).await.unwrap_err();
    assert!(matches!(err, ExtractionError::EmptyResponse));

    parser.wait_for_cleanup().await;
    assert_eq!(parser.backend().deletes().len(), 1);
}

#[tokio::test]
async fn test_malformed_response_is_parse_error() {
    let parser = ReportParser::new(MockBackend::with_output(r#"{"parameters": [oops]}"#));

    let err = parser.parse_report(&pdf(), TestType::Soil).await.unwrap_err();
    assert!(matches!(err, ExtractionError::JsonParse { .. }));
    assert!(err.to_string().contains("Failed to parse model response"));

    parser.wait_for_cleanup().await;
    assert_eq!(parser.backend().deletes().len(), 1);
}

#[tokio::test]
async fn test_api_error_propagates_and_file_cleaned_up() {
    let parser = ReportParser::new(MockBackend::with_api_error(429, "rate limited"));

    let err = parser.parse_report(&pdf(), TestType::Petiole).await.unwrap_err();
    assert!(matches!(err, ExtractionError::Api { status: 429, .. }));

    parser.wait_for_cleanup().await;
    assert_eq!(parser.backend().deletes().len(), 1);
}

#[tokio::test]
async fn test_cleanup_failure_does_not_fail_parse() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[{"name":"Zinc","value":1.4}],"summary":null,"notes":null,"confidence":0.9,"testDate":null}"#,
    )
    .failing_deletes();
    let parser = ReportParser::new(backend);

    let report = parser.parse_report(&pdf(), TestType::Soil).await.unwrap();
    assert_eq!(report.get("zinc"), Some(1.4));

    parser.wait_for_cleanup().await;
    assert_eq!(parser.backend().deletes().len(), 1);
}

#[tokio::test]
async fn test_parsed_report_json_shape() {
    let backend = MockBackend::with_output(
        r#"{"parameters":[{"name":"EC","value":0.3}],"summary":"ok","notes":"lab remark","confidence":0.5,"testDate":"2025-01-09"}"#,
    );
    let parser = ReportParser::new(backend);

    let report = parser.parse_report(&pdf(), TestType::Soil).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["parameters"]["ec"], 0.3);
    assert_eq!(json["summary"], "ok");
    assert_eq!(json["rawNotes"], "lab remark");
    assert_eq!(json["confidence"], 0.5);
    assert_eq!(json["testDate"], "2025-01-09");
}
