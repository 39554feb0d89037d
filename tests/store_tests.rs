use chrono::NaiveDate;
use timeclock::db::pool::DbPool;
use timeclock::db::store::{MemoryStore, RECORDS_SLOT, RecordStore, SqliteStore};
use timeclock::errors::AppError;
use timeclock::models::{AttendanceRecord, LocationReading};

mod common;
use common::setup_test_db;

fn sample_records() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            clock_in_time: Some("09:00:00 AM".into()),
            clock_out_time: Some("05:30:00 PM".into()),
            clock_in_location: Some(LocationReading::new(45.5, 9.25, Some(12.5))),
            clock_out_location: Some(LocationReading::new(45.25, 9.125, None)),
        },
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 13).unwrap(),
            clock_in_time: Some("08:45:10 AM".into()),
            clock_out_time: None,
            clock_in_location: None,
            clock_out_location: None,
        },
    ]
}

#[test]
fn test_memory_store_empty_loads_nothing() {
    let store = MemoryStore::new();
    assert!(store.load_all().unwrap().is_empty());

    let blank = MemoryStore::with_raw("   ");
    assert!(blank.load_all().unwrap().is_empty());
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let records = sample_records();

    store.save_all(&records).unwrap();
    assert_eq!(store.load_all().unwrap(), records);
}

#[test]
fn test_memory_store_corrupt_is_an_error() {
    let store = MemoryStore::with_raw("[{\"date\": 42}");
    assert!(matches!(store.load_all(), Err(AppError::Json(_))));
}

#[test]
fn test_update_failure_leaves_store_untouched() {
    let mut store = MemoryStore::new();
    store.save_all(&sample_records()).unwrap();

    let res: Result<(), AppError> = store.update(|records| {
        records.clear();
        Err(AppError::Other("abort".into()))
    });

    assert!(res.is_err());
    assert_eq!(store.load_all().unwrap(), sample_records());
}

#[test]
fn test_persisted_layout_uses_slot_field_names() {
    let mut store = MemoryStore::new();
    store.save_all(&sample_records()).unwrap();

    let raw: serde_json::Value = serde_json::from_str(store.raw().unwrap()).unwrap();
    let first = &raw[0];

    assert_eq!(first["date"], "2026-10-12");
    assert_eq!(first["clockInTime"], "09:00:00 AM");
    assert_eq!(first["clockOutTime"], "05:30:00 PM");
    assert_eq!(first["clockInLocation"]["latitude"], 45.5);
    assert_eq!(first["clockInLocation"]["accuracy"], 12.5);
    assert!(first["clockOutLocation"]["accuracy"].is_null());
    assert!(raw[1]["clockOutTime"].is_null());
}

#[test]
fn test_records_without_location_fields_still_load() {
    let store = MemoryStore::with_raw(
        r#"[{"date":"2026-10-14","clockInTime":null,"clockOutTime":null}]"#,
    );

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0],
        AttendanceRecord::placeholder(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    );
}

#[test]
fn test_sqlite_store_empty_then_round_trip() {
    let db_path = setup_test_db("store_round_trip");

    let mut store = SqliteStore::open(&db_path).unwrap();
    assert!(store.load_all().unwrap().is_empty());

    let records = sample_records();
    store.save_all(&records).unwrap();
    drop(store);

    // fresh connection sees the same collection
    let reopened = SqliteStore::open(&db_path).unwrap();
    assert_eq!(reopened.load_all().unwrap(), records);
}

#[test]
fn test_sqlite_store_overwrites_whole_collection() {
    let db_path = setup_test_db("store_overwrite");
    let mut store = SqliteStore::open(&db_path).unwrap();

    store.save_all(&sample_records()).unwrap();
    store.save_all(&sample_records()[1..]).unwrap();

    assert_eq!(store.load_all().unwrap(), sample_records()[1..].to_vec());

    let slots: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM storage", [], |row| row.get(0))
        .unwrap();
    assert_eq!(slots, 1);
}

#[test]
fn test_sqlite_update_rolls_back_on_error() {
    let db_path = setup_test_db("store_rollback");
    let mut store = SqliteStore::open(&db_path).unwrap();
    store.save_all(&sample_records()).unwrap();

    let res: Result<(), AppError> = store.update(|records| {
        records.pop();
        Err(AppError::Other("abort".into()))
    });

    assert!(res.is_err());
    assert_eq!(store.load_all().unwrap(), sample_records());
}

#[test]
fn test_sqlite_corrupt_slot_is_an_error() {
    let db_path = setup_test_db("store_corrupt");
    let store = SqliteStore::open(&db_path).unwrap();

    store
        .conn()
        .execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, 'not json', 'now')",
            [RECORDS_SLOT],
        )
        .unwrap();

    assert!(store.load_all().is_err());
}

#[test]
fn test_sqlite_open_is_idempotent() {
    let db_path = setup_test_db("store_migrations");

    SqliteStore::open(&db_path).unwrap();
    let store = SqliteStore::open(&db_path).unwrap();

    let applied: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn test_in_memory_sqlite_store() {
    let mut store = SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap();
    assert!(store.load_all().unwrap().is_empty());

    let added = store
        .update(|records| {
            records.extend(sample_records());
            Ok(records.len())
        })
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(store.load_all().unwrap(), sample_records());
}
