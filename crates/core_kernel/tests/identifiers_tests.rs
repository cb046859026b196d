//! Unit tests for claim identifiers

use std::collections::HashSet;

use core_kernel::ClaimId;

#[test]
fn test_new_generates_unique_ids() {
    let ids: HashSet<ClaimId> = (0..200).map(|_| ClaimId::new()).collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_prefix() {
    assert_eq!(ClaimId::prefix(), "C");
    assert!(ClaimId::new().as_str().starts_with(ClaimId::prefix()));
}

#[test]
fn test_from_raw_keeps_foreign_ids() {
    let id = ClaimId::from_raw("legacy-42");
    assert_eq!(id.as_str(), "legacy-42");
    assert_eq!(id.to_string(), "legacy-42");
}

#[test]
fn test_parse_trims_whitespace() {
    let id: ClaimId = " Cx1y2z3a ".parse().unwrap();
    assert_eq!(id.as_str(), "Cx1y2z3a");
}

#[test]
fn test_serde_is_transparent() {
    let id = ClaimId::from_raw("Cabcdefg");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"Cabcdefg\"");

    let back: ClaimId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
