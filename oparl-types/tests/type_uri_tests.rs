use oparl_types::{Error, SCHEMA_URI, TypeUri};
use proptest::prelude::*;

// ── Parsing ───────────────────────────────────────────────────────

#[test]
fn parse_canonical_uri() {
    let uri = TypeUri::parse("https://schema.oparl.org/1.0/Body").unwrap();
    assert_eq!(uri.namespace(), SCHEMA_URI);
    assert_eq!(uri.name(), "Body");
    assert!(uri.is_canonical());
}

#[test]
fn parse_foreign_namespace() {
    let uri = TypeUri::parse("this-is-not-the-correct-schema-uri/System").unwrap();
    assert_eq!(uri.namespace(), "this-is-not-the-correct-schema-uri");
    assert_eq!(uri.name(), "System");
    assert!(!uri.is_canonical());
}

#[test]
fn parse_splits_at_last_slash() {
    let uri = TypeUri::parse("not/known").unwrap();
    assert_eq!(uri.namespace(), "not");
    assert_eq!(uri.name(), "known");
}

#[test]
fn parse_without_slash_fails() {
    assert_eq!(
        TypeUri::parse("invalid"),
        Err(Error::MalformedTypeUri("invalid".to_string()))
    );
}

#[test]
fn parse_with_empty_name_fails() {
    let err = TypeUri::parse("https://schema.oparl.org/1.0/").unwrap_err();
    assert!(err.to_string().contains("invalid type URI"));
}

#[test]
fn from_str_delegates_to_parse() {
    let uri: TypeUri = "https://schema.oparl.org/1.0/Paper".parse().unwrap();
    assert_eq!(uri.name(), "Paper");
}

// ── Construction & display ────────────────────────────────────────

#[test]
fn new_trims_trailing_slash() {
    let uri = TypeUri::new("https://schema.oparl.org/1.0/", "Person");
    assert_eq!(uri.to_string(), "https://schema.oparl.org/1.0/Person");
}

proptest! {
    #[test]
    fn display_parse_roundtrip(ns in "[a-z:/.]{0,20}[a-z]", name in "[A-Z][a-zA-Z]{0,15}") {
        let uri = TypeUri::new(&ns, &name);
        let parsed = TypeUri::parse(&uri.to_string()).unwrap();
        prop_assert_eq!(parsed.name(), name.as_str());
        prop_assert_eq!(parsed, uri);
    }
}
