use super::*;
use tempfile::tempdir;

const NOOP: &str = "-- tidemark:up\n-- tidemark:down\n";

fn seed(dir: &Path, file_name: &str) {
    fs::write(dir.join(file_name), NOOP).unwrap();
}

#[test]
fn test_discover_returns_units_sorted_ascending() {
    let dir = tempdir().unwrap();
    // Seeded intentionally out of order
    seed(dir.path(), "20240301000000-third.sql");
    seed(dir.path(), "20240101000000-first.sql");
    seed(dir.path(), "20240201000000-second.sql");

    let units = discover_units(dir.path()).unwrap();
    let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn test_discover_ignores_non_matching_files() {
    let dir = tempdir().unwrap();
    seed(dir.path(), "20240101000000-keep.sql");
    fs::write(dir.path().join("README.md"), "notes").unwrap();
    fs::write(dir.path().join("schema.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("2024-shortstamp.sql"), NOOP).unwrap();
    fs::write(dir.path().join("20240101000000.sql"), NOOP).unwrap();

    let units = discover_units(dir.path()).unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "keep");
}

#[test]
fn test_discover_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    let units = discover_units(&dir.path().join("does-not-exist")).unwrap();
    assert!(units.is_empty());
}

#[test]
fn test_discover_empty_directory_is_empty() {
    let dir = tempdir().unwrap();
    assert!(discover_units(dir.path()).unwrap().is_empty());
}

#[test]
fn test_discover_propagates_unparseable_content() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("20240101000000-broken.sql"),
        "SELECT 1; -- no markers",
    )
    .unwrap();

    assert!(discover_units(dir.path()).is_err());
}

#[test]
fn test_matches_naming_convention() {
    assert!(matches_naming_convention("20240101000000-name.sql"));
    assert!(matches_naming_convention("20240101000000-a_b.c.sql"));
    assert!(!matches_naming_convention("20240101000000-name.txt"));
    assert!(!matches_naming_convention("20240101000000.sql"));
    assert!(!matches_naming_convention("20240101000000-.sql"));
    assert!(!matches_naming_convention("2024010100000x-name.sql"));
    assert!(!matches_naming_convention("20240101000000-has space.sql"));
}
