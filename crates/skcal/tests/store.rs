//! Integration tests for loading and saving calendar data.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use skcal::{DataLoadError, DateFactStore, DateFacts, DayKey, FactLookup};
use tempfile::{NamedTempFile, TempDir};

fn key(s: &str) -> DayKey {
    s.parse().unwrap()
}

// =========================================================================
// Bundled calendar
// =========================================================================

#[test]
fn bundled_calendar_covers_every_day() {
    let store = DateFactStore::bundled().unwrap();
    assert_eq!(store.len(), 366);
    assert!(store.lookup(key("0229")).is_some());
}

#[test]
fn bundled_calendar_has_slovak_facts() {
    let store = DateFactStore::bundled().unwrap();

    let new_year = store.lookup(key("0101")).unwrap();
    assert_eq!(new_year.namedays(), None);
    assert_eq!(
        new_year.holiday(),
        Some("Deň vzniku Slovenskej republiky")
    );

    let july_5 = store.lookup(key("0705")).unwrap();
    assert_eq!(july_5.namedays(), Some("Cyril, Metod"));
    assert_eq!(july_5.holiday(), Some("Sviatok svätého Cyrila a Metoda"));

    let earth_day = store.lookup(key("0422")).unwrap();
    assert_eq!(earth_day.namedays(), Some("Slavomír"));
    assert_eq!(earth_day.world_day(), Some("Deň Zeme"));
}

#[test]
fn bundled_calendar_iterates_in_calendar_order() {
    let store = DateFactStore::bundled().unwrap();
    let keys: Vec<DayKey> = store.iter().map(DateFacts::day_key).collect();
    assert_eq!(keys.first(), Some(&key("0101")));
    assert_eq!(keys.last(), Some(&key("1231")));
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

// =========================================================================
// Loading from strings and records
// =========================================================================

#[test]
fn from_json_str_reads_optional_fields() {
    let store = DateFactStore::from_json_str(
        r#"{
            "dates": [
                { "date": "0629", "namedays": "Peter, Pavol" },
                { "date": "1225", "namedays": "", "holidays": "Christmas", "worldDay": "" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(store.len(), 2);
    let christmas = store.lookup(key("1225")).unwrap();
    assert_eq!(christmas.namedays(), None);
    assert_eq!(christmas.holiday(), Some("Christmas"));
    assert_eq!(christmas.world_day(), None);
    assert!(store.lookup(key("0101")).is_none());
}

#[test]
fn from_json_str_reports_syntax_position() {
    let err = DateFactStore::from_json_str("{\n  \"dates\": [ { \"date\": } ]\n}").unwrap_err();
    match err {
        DataLoadError::Parse { line, column, .. } => {
            assert_eq!(line, 2);
            assert!(column > 0);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn from_json_str_rejects_invalid_day_key() {
    let err = DateFactStore::from_json_str(r#"{ "dates": [ { "date": "0230" } ] }"#).unwrap_err();
    assert!(matches!(err, DataLoadError::Parse { .. }));
    assert!(err.to_string().contains("0230"));
}

#[test]
fn from_json_str_rejects_duplicate_days() {
    let err = DateFactStore::from_json_str(
        r#"{ "dates": [ { "date": "0101" }, { "date": "0101", "namedays": "X" } ] }"#,
    )
    .unwrap_err();
    match err {
        DataLoadError::DuplicateDay { key: day, .. } => assert_eq!(day, key("0101")),
        other => panic!("expected duplicate day, got {other:?}"),
    }
}

#[test]
fn from_facts_builds_store() {
    let store = DateFactStore::from_facts([
        DateFacts::builder()
            .day_key(key("0308"))
            .world_day("Medzinárodný deň žien")
            .build(),
        DateFacts::builder().day_key(key("0319")).namedays("Jozef").build(),
    ])
    .unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        store.lookup(key("0319")).and_then(DateFacts::namedays),
        Some("Jozef")
    );
}

#[test]
fn empty_store_has_no_facts() {
    let store = DateFactStore::new();
    assert!(store.is_empty());
    assert!(store.lookup(key("0101")).is_none());
}

// =========================================================================
// Files
// =========================================================================

#[test]
fn load_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "dates": [ {{ "date": "1111", "namedays": "Martin" }} ] }}"#).unwrap();
    file.flush().unwrap();

    let store = DateFactStore::load(file.path()).unwrap();
    assert_eq!(
        store.lookup(key("1111")).and_then(DateFacts::namedays),
        Some("Martin")
    );
}

#[test]
fn load_file_not_found() {
    let result = DateFactStore::load("/nonexistent/path/calendar.json");
    assert!(matches!(result, Err(DataLoadError::Io { .. })));
}

#[test]
fn load_error_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();
    file.flush().unwrap();

    let err = DateFactStore::load(file.path()).unwrap_err();
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn save_then_load_preserves_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calendar.json");

    let store = DateFactStore::bundled().unwrap();
    store.save(&path).unwrap();
    let reloaded = DateFactStore::load(&path).unwrap();

    assert_eq!(reloaded.len(), store.len());
    assert!(store.iter().eq(reloaded.iter()));
}

#[test]
fn to_json_string_uses_data_file_field_names() {
    let store = DateFactStore::from_facts([DateFacts::builder()
        .day_key(key("1224"))
        .namedays("Adam, Eva")
        .holiday("Štedrý deň")
        .build()])
    .unwrap();
    let json = store.to_json_string().unwrap();
    assert!(json.contains(r#""date": "1224""#));
    assert!(json.contains(r#""holidays": "Štedrý deň""#));
    assert!(!json.contains("worldDay"));
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn store_can_be_shared_across_threads() {
    let store = Arc::new(DateFactStore::bundled().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .lookup(key("0629"))
                    .and_then(DateFacts::namedays)
                    .map(str::to_string)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("Peter, Pavol, Petra"));
    }
}
