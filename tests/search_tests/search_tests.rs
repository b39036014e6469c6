//! Tests for SearchEngine
//!
//! These tests verify:
//! - OR semantics across supplied criteria
//! - Exact, case-sensitive text comparison
//! - File-order results with (label, value) pairs
//! - Fail-fast on zero criteria and NotFound on missing files

use std::path::PathBuf;

use stockpile::search::{SearchCriteria, SearchEngine};
use stockpile::store::RecordStore;
use stockpile::{Header, Record, StockError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn banane() -> Record {
    Record::new("Banane", "10", "1.5", "Fruits")
}

fn pomme() -> Record {
    Record::new("Pomme", "5", "2.0", "Fruits")
}

fn marteau() -> Record {
    Record::new("Marteau", "5", "12.0", "Outils")
}

fn setup_fruit_store() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("stock.csv");
    let store = RecordStore::new(&path);
    store.create(&Header::default()).unwrap();
    for record in [banane(), pomme(), marteau()] {
        store.append(&record).unwrap();
    }
    (temp, path)
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test]
fn test_search_or_semantics() {
    let (_temp, path) = setup_fruit_store();
    let criteria = SearchCriteria::new().name("Banane").category("Fruits");

    let results = SearchEngine::search(&path, &criteria).unwrap();

    let found: Vec<Record> = results.records().cloned().collect();
    assert_eq!(found, vec![banane(), pomme()]);
}

#[test]
fn test_search_by_quantity_is_text_equality() {
    let (_temp, path) = setup_fruit_store();

    let results = SearchEngine::search(&path, &SearchCriteria::new().quantity("5")).unwrap();
    assert_eq!(results.len(), 2);

    let results = SearchEngine::search(&path, &SearchCriteria::new().quantity("05")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_search_by_price() {
    let (_temp, path) = setup_fruit_store();

    let results = SearchEngine::search(&path, &SearchCriteria::new().unit_price("12.0")).unwrap();

    let found: Vec<Record> = results.records().cloned().collect();
    assert_eq!(found, vec![marteau()]);
}

#[test]
fn test_search_is_case_sensitive() {
    let (_temp, path) = setup_fruit_store();

    let results = SearchEngine::search(&path, &SearchCriteria::new().name("banane")).unwrap();

    assert!(results.is_empty());
}

#[test]
fn test_search_returns_label_value_pairs() {
    let (_temp, path) = setup_fruit_store();

    let results = SearchEngine::search(&path, &SearchCriteria::new().name("Pomme")).unwrap();

    assert_eq!(results.len(), 1);
    let pairs: Vec<(&str, &str)> = results.matches[0]
        .fields
        .iter()
        .map(|(l, v)| (l.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("nom du produit", "Pomme"),
            ("quantité", "5"),
            ("prix unitaire", "2.0"),
            ("catégorie", "Fruits"),
        ]
    );
}

#[test]
fn test_search_no_match_is_distinct_signal() {
    let (_temp, path) = setup_fruit_store();

    let results = SearchEngine::search(&path, &SearchCriteria::new().category("Légumes")).unwrap();

    assert!(results.is_empty());
    assert_eq!(results.header, Header::default());
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_search_without_criteria_fails_fast() {
    let (_temp, path) = setup_fruit_store();

    let result = SearchEngine::search(&path, &SearchCriteria::new());

    assert!(matches!(result, Err(StockError::InvalidArgument(_))));
}

#[test]
fn test_search_without_criteria_checked_before_open() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.csv");

    let result = SearchEngine::search(&missing, &SearchCriteria::new().name(""));

    assert!(matches!(result, Err(StockError::InvalidArgument(_))));
}

#[test]
fn test_search_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.csv");

    let result = SearchEngine::search(&missing, &SearchCriteria::new().name("Banane"));

    assert!(matches!(result, Err(StockError::NotFound(_))));
}
