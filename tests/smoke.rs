//! Integration smoke tests for `syllabus_tree`

use syllabus_tree::catalog::SyllabusCatalog;
use syllabus_tree::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn builtin_catalog_loads() {
    let catalog = SyllabusCatalog::builtin().expect("bundled plans should parse");
    assert_eq!(catalog.class_levels(), vec!["9", "10", "11", "12"]);
    for structure in catalog.iter() {
        assert!(structure.validate().is_ok(), "class {}", structure.class_level);
        assert!(!structure.months.is_empty());
    }
}
