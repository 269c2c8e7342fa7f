use oparl_model::{Diagnostic, DiagnosticKind};

#[test]
fn diagnostic_display_includes_kind_and_message() {
    let d = Diagnostic::new(
        DiagnosticKind::ContentMalformed,
        "https://example.org/org/1",
        "invalid date string",
    );
    assert_eq!(d.to_string(), "[content_malformed] invalid date string");
    assert!(d.field.is_none());
}

#[test]
fn diagnostic_with_field() {
    let d = Diagnostic::new(DiagnosticKind::SpecificationViolation, "b1", "must contain a list")
        .with_field("membership");
    assert_eq!(d.field.as_deref(), Some("membership"));
    assert_eq!(d.subject, "b1");
}

#[test]
fn diagnostic_serde_skips_missing_field() {
    let d = Diagnostic::new(DiagnosticKind::IdMismatch, "a", "different ID");
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["kind"], "id_mismatch");
    assert!(json.get("field").is_none());

    let parsed: Diagnostic = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, d);
}

#[test]
fn diagnostic_kind_names_are_snake_case() {
    assert_eq!(DiagnosticKind::SchemaMismatch.as_str(), "schema_mismatch");
    assert_eq!(
        DiagnosticKind::PaginationInconsistent.to_string(),
        "pagination_inconsistent"
    );
}
