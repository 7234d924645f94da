//! Loading and saving catalogs as JSON.

use std::fs;

use crate::common::{names, sample_catalog};
use mintsearch::{Catalog, SearchError, SortKey};

#[test]
fn test_save_then_load_preserves_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/catalog.json");

    let catalog = Catalog::new(sample_catalog());
    catalog.save_json(&path).unwrap();
    let loaded = Catalog::load_json(&path).unwrap();

    assert_eq!(loaded, catalog);
}

#[test]
fn test_loaded_catalog_ranks_like_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let catalog = Catalog::new(sample_catalog());
    catalog.save_json(&path).unwrap();
    let loaded = Catalog::load_json(&path).unwrap();

    for query in ["bluetooth", "mouse speed", "configure", "terminl"] {
        assert_eq!(
            names(&loaded.rank(query, SortKey::Relevance)),
            names(&catalog.rank(query, SortKey::Relevance)),
            "query {:?}",
            query
        );
    }
}

#[test]
fn test_load_uses_type_key_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"name": "Printers", "type": "Utility", "module": "system-config-printer"},
            {"name": "Night Light", "description": null}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::load_json(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].record_type, "Utility");
    assert_eq!(catalog.records()[1].description, "");
    assert_eq!(catalog.records()[1].keywords, "");
}

#[test]
fn test_saved_json_uses_type_key() {
    let catalog = Catalog::new(sample_catalog());
    let json = catalog.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &value[0];
    assert!(first.get("type").is_some());
    assert!(first.get("record_type").is_none());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_json(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SearchError::Io { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_load_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"name\": \"Mouse\"").unwrap();
    let err = Catalog::load_json(&path).unwrap_err();
    assert!(matches!(err, SearchError::Json { .. }));
}

#[test]
fn test_load_rejects_nameless_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"[{"name": "Mouse"}, {"name": "Keyboard"}, {"name": ""}]"#).unwrap();
    let err = Catalog::load_json(&path).unwrap_err();
    assert!(matches!(err, SearchError::InvalidRecord { index: 2, .. }));
}

#[test]
fn test_empty_array_is_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "[]").unwrap();
    let catalog = Catalog::load_json(&path).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.rank("anything", SortKey::Relevance).is_empty());
}
