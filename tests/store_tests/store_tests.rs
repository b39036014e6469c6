//! Tests for RecordStore
//!
//! These tests verify:
//! - Idempotent creation that never touches an existing file
//! - Append order and NotFound on missing files
//! - Predicate-exact delete with header preservation
//! - Original file intact when a rewrite is interrupted
//! - Round-trip of values containing delimiters, quotes and newlines

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

use stockpile::store::{CreateOutcome, RecordStore};
use stockpile::{Header, Record, StockError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::new(temp_dir.path().join("stock.csv"));
    (temp_dir, store)
}

fn created_store_with(records: &[Record]) -> (TempDir, RecordStore) {
    let (temp, store) = setup_temp_store();
    store.create(&Header::default()).unwrap();
    for record in records {
        store.append(record).unwrap();
    }
    (temp, store)
}

fn product(name: &str) -> Record {
    Record::new(name, "1", "1.0", "Divers")
}

fn names(store: &RecordStore) -> Vec<String> {
    store
        .read_all()
        .unwrap()
        .records
        .into_iter()
        .map(|r| r.name)
        .collect()
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_writes_header_only() {
    let (_temp, store) = setup_temp_store();

    let outcome = store.create(&Header::default()).unwrap();

    assert_eq!(outcome, CreateOutcome::Created);
    let bytes = fs::read_to_string(store.path()).unwrap();
    assert_eq!(bytes, "nom du produit,quantité,prix unitaire,catégorie\r\n");

    let contents = store.read_all().unwrap();
    assert_eq!(contents.header, Header::default());
    assert!(contents.records.is_empty());
}

#[test]
fn test_create_is_idempotent() {
    let (_temp, store) = created_store_with(&[product("Banane")]);
    let before = fs::read(store.path()).unwrap();

    let outcome = store.create(&Header::default()).unwrap();

    assert_eq!(outcome, CreateOutcome::AlreadyExists);
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_create_leaves_mismatched_file_untouched() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "something else entirely\n").unwrap();

    let outcome = store.create(&Header::default()).unwrap();

    assert_eq!(outcome, CreateOutcome::AlreadyExists);
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "something else entirely\n"
    );
}

#[test]
fn test_create_in_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::new(temp_dir.path().join("no_such_dir").join("x.csv"));

    let result = store.create(&Header::default());

    assert!(matches!(result, Err(StockError::Io(_))));
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_preserves_order() {
    let r1 = Record::new("Banane", "10", "1.5", "Fruits");
    let r2 = Record::new("Pomme", "5", "2.0", "Fruits");
    let (_temp, store) = created_store_with(&[r1.clone(), r2.clone()]);

    let contents = store.read_all().unwrap();

    assert_eq!(contents.records, vec![r1, r2]);
}

#[test]
fn test_append_to_missing_file_is_not_found() {
    let (_temp, store) = setup_temp_store();

    let result = store.append(&product("Banane"));

    match result {
        Err(StockError::NotFound(path)) => assert_eq!(path, store.path()),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(!store.exists());
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_is_predicate_exact() {
    let (_temp, store) =
        created_store_with(&[product("A"), product("B"), product("A"), product("C")]);

    let removed = store.delete_matching(|r| r.name == "A").unwrap();

    assert_eq!(removed, 2);
    assert_eq!(names(&store), vec!["B", "C"]);
    assert_eq!(store.read_all().unwrap().header, Header::default());
}

#[test]
fn test_repeat_delete_reports_zero_and_keeps_bytes() {
    let (_temp, store) = created_store_with(&[product("A"), product("B")]);
    store.delete_matching(|r| r.name == "A").unwrap();
    let before = fs::read(store.path()).unwrap();

    let removed = store.delete_matching(|r| r.name == "A").unwrap();

    assert_eq!(removed, 0);
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_delete_preserves_custom_header() {
    let (_temp, store) = setup_temp_store();
    let header = Header::new(["name", "qty", "price", "category"]);
    store.create(&header).unwrap();
    store.append(&product("A")).unwrap();

    store.delete_matching(|r| r.name == "A").unwrap();

    let contents = store.read_all().unwrap();
    assert_eq!(contents.header, header);
    assert!(contents.records.is_empty());
}

#[test]
fn test_delete_missing_file_is_not_found() {
    let (_temp, store) = setup_temp_store();

    let result = store.delete_matching(|_| true);

    assert!(matches!(result, Err(StockError::NotFound(_))));
}

#[test]
fn test_interrupted_delete_leaves_original_intact() {
    let (temp, store) = created_store_with(&[product("A"), product("B"), product("C")]);
    let before = fs::read(store.path()).unwrap();

    let mut seen = 0;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        store.delete_matching(|r| {
            seen += 1;
            if seen == 2 {
                panic!("interrupted mid-rewrite");
            }
            r.name == "A"
        })
    }));

    assert!(result.is_err());
    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert_eq!(names(&store), vec!["A", "B", "C"]);

    // The temp sibling is cleaned up on unwind
    let leftovers: Vec<PathBuf> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p != store.path())
        .collect();
    assert!(leftovers.is_empty(), "leftover files: {:?}", leftovers);
}

#[cfg(unix)]
#[test]
fn test_delete_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_temp, store) = created_store_with(&[product("A"), product("B")]);
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

    store.delete_matching(|r| r.name == "A").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
    assert_eq!(names(&store), vec!["B"]);
}

#[test]
fn test_delete_normalizes_quoting_and_line_endings() {
    let (_temp, store) = setup_temp_store();
    fs::write(
        store.path(),
        "\"nom du produit\",quantité,prix unitaire,catégorie\nA,1,1,x\nB,2,2,y\n",
    )
    .unwrap();

    store.delete_matching(|r| r.name == "A").unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "nom du produit,quantité,prix unitaire,catégorie\r\nB,2,2,y\r\n"
    );
}

// =============================================================================
// Read / Encoding Tests
// =============================================================================

#[test]
fn test_round_trip_special_characters() {
    let tricky = Record::new(
        "Jus, pressé",
        "\"douze\"",
        "3,5",
        "Boissons\nfraîches",
    );
    let (_temp, store) = created_store_with(&[tricky.clone(), product("Plain")]);

    let contents = store.read_all().unwrap();

    assert_eq!(contents.records[0], tricky);
    assert_eq!(contents.records[1], product("Plain"));
}

#[test]
fn test_round_trip_survives_delete_rewrite() {
    let tricky = Record::new("Clou \"6mm\"", "100", "0,10", "Outils");
    let (_temp, store) = created_store_with(&[product("A"), tricky.clone()]);

    store.delete_matching(|r| r.name == "A").unwrap();

    assert_eq!(store.read_all().unwrap().records, vec![tricky]);
}

#[test]
fn test_read_empty_file_is_missing_header() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.path(), "").unwrap();

    let result = store.read_all();

    assert!(matches!(result, Err(StockError::MissingHeader(_))));
}

#[test]
fn test_read_short_row_is_malformed() {
    let (_temp, store) = created_store_with(&[product("A")]);
    let mut text = fs::read_to_string(store.path()).unwrap();
    text.push_str("only,two\r\n");
    fs::write(store.path(), text).unwrap();

    let result = store.read_all();

    match result {
        Err(StockError::MalformedRecord { line, fields, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(fields, 2);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_reads_lf_terminated_files() {
    let (_temp, store) = setup_temp_store();
    fs::write(
        store.path(),
        "nom du produit,quantité,prix unitaire,catégorie\nBanane,10,1.5,Fruits\n",
    )
    .unwrap();

    let contents = store.read_all().unwrap();

    assert_eq!(
        contents.records,
        vec![Record::new("Banane", "10", "1.5", "Fruits")]
    );
}
