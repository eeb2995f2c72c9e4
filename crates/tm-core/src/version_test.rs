use super::*;

#[test]
fn test_parse_bare_timestamp() {
    let v = Version::parse("19920524010203").unwrap();
    assert_eq!(v.as_identifier(), "19920524010203");
    assert_eq!(v.name(), "");
    assert_eq!(
        v.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        "19920524010203"
    );
}

#[test]
fn test_parse_with_name_suffix() {
    let v = Version::parse("20240101120000-create-users").unwrap();
    assert_eq!(v.as_identifier(), "20240101120000-create-users");
    assert_eq!(v.name(), "create-users");
}

#[test]
fn test_identifier_round_trips_exactly() {
    for raw in ["20240101120000", "20240101120000-a", "20240101120000-x_y.z"] {
        assert_eq!(Version::parse(raw).unwrap().as_identifier(), raw);
    }
}

#[test]
fn test_rejects_short_prefix() {
    let err = Version::parse("2024").unwrap_err();
    assert!(matches!(err, CoreError::MalformedVersion { .. }));
}

#[test]
fn test_rejects_non_digit_prefix() {
    assert!(Version::parse("2024010112000x-name").is_err());
}

#[test]
fn test_rejects_invalid_calendar_fields() {
    // Month 13
    assert!(Version::parse("20241301120000-bad").is_err());
    // Day 32
    assert!(Version::parse("20240132120000-bad").is_err());
    // Hour 25
    assert!(Version::parse("20240101250000-bad").is_err());
}

#[test]
fn test_rejects_suffix_without_hyphen() {
    assert!(Version::parse("20240101120000name").is_err());
}

#[test]
fn test_rejects_empty_or_whitespace_suffix() {
    assert!(Version::parse("20240101120000-").is_err());
    assert!(Version::parse("20240101120000-has space").is_err());
}

#[test]
fn test_ordering_ignores_suffix() {
    let a = Version::parse("20240101120000-zzzz").unwrap();
    let b = Version::parse("20240101120001-a").unwrap();
    assert!(a < b);

    // Same instant with different suffixes compares equal
    let c = Version::parse("20240101120000-other").unwrap();
    assert_eq!(a, c);
}

#[test]
fn test_ordering_is_by_instant_not_string() {
    // Lexicographically "20240102000000-a" < "20240102000000" is false for
    // strings but the suffix must not matter at all.
    let short = Version::parse("20240102000000").unwrap();
    let long = Version::parse("20240102000000-averylongname").unwrap();
    assert_eq!(short.cmp(&long), std::cmp::Ordering::Equal);
}

#[test]
fn test_stable_sort_keeps_discovery_order_for_equal_versions() {
    let mut versions = vec![
        Version::parse("20240101120000-first").unwrap(),
        Version::parse("20240101120000-second").unwrap(),
    ];
    versions.sort();
    assert_eq!(versions[0].name(), "first");
    assert_eq!(versions[1].name(), "second");
}

#[test]
fn test_now_produces_parseable_version() {
    let v = Version::now("my-migration").unwrap();
    assert_eq!(v.name(), "my-migration");
    let reparsed = Version::parse(v.as_identifier()).unwrap();
    assert_eq!(reparsed, v);
}

#[test]
fn test_display_matches_identifier() {
    let v = Version::parse("20240101120000-n").unwrap();
    assert_eq!(v.to_string(), "20240101120000-n");
}
