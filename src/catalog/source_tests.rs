//! Tests for catalog/source

use super::*;
use crate::catalog::Attribute;
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"[
    {"id": 2, "localized_name": "Axe", "primary_attr": "str", "attack_type": "Melee"},
    {"id": 5, "localized_name": "Crystal Maiden", "primary_attr": "int", "attack_type": "Ranged"}
]"#;

#[test]
fn test_parse_catalog_json() {
    let entries = parse_catalog_json(CATALOG).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Axe");
    assert_eq!(entries[1].primary_attr, Attribute::Intelligence);
}

#[test]
fn test_parse_invalid_catalog_is_unavailable() {
    let result = parse_catalog_json(r#"{"error": "rate limited"}"#);
    assert!(matches!(result, Err(DraftError::CatalogUnavailable(_))));
}

#[tokio::test]
async fn test_file_catalog_reads_entries() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();

    let source = FileCatalog::new(file.path());
    let entries = source.fetch_catalog().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(source.path(), file.path());
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let source = FileCatalog::new("/nonexistent/draftpick/heroes.json");
    let result = source.fetch_catalog().await;

    match result {
        Err(DraftError::CatalogUnavailable(msg)) => assert!(msg.contains("heroes.json")),
        other => panic!("Expected CatalogUnavailable, got {:?}", other),
    }
}
