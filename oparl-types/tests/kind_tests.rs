use oparl_types::{Error, Kind};
use std::collections::HashSet;
use std::str::FromStr;

// ── Names ─────────────────────────────────────────────────────────

#[test]
fn kind_display_matches_type_uri_name() {
    assert_eq!(Kind::Body.to_string(), "Body");
    assert_eq!(Kind::LegislativeTerm.to_string(), "LegislativeTerm");
    assert_eq!(Kind::AgendaItem.as_str(), "AgendaItem");
}

#[test]
fn kind_from_str_roundtrip_for_all_kinds() {
    for kind in Kind::ALL {
        assert_eq!(Kind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn kind_from_str_is_case_sensitive() {
    assert_eq!(
        Kind::from_str("body"),
        Err(Error::UnknownKind("body".to_string()))
    );
}

#[test]
fn kind_from_str_unknown() {
    let err = "Parliament".parse::<Kind>().unwrap_err();
    assert!(err.to_string().contains("unknown kind"));
    assert!(err.to_string().contains("Parliament"));
}

// ── ALL ───────────────────────────────────────────────────────────

#[test]
fn all_kinds_are_distinct() {
    let set: HashSet<Kind> = Kind::ALL.iter().copied().collect();
    assert_eq!(set.len(), Kind::ALL.len());
}

#[test]
fn all_kinds_are_sorted() {
    let mut sorted = Kind::ALL;
    sorted.sort();
    assert_eq!(sorted, Kind::ALL);
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn kind_serializes_as_name() {
    let json = serde_json::to_string(&Kind::Meeting).unwrap();
    assert_eq!(json, "\"Meeting\"");
    let parsed: Kind = serde_json::from_str("\"Paper\"").unwrap();
    assert_eq!(parsed, Kind::Paper);
}
