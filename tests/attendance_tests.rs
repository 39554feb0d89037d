use chrono::{Duration, NaiveDate, NaiveDateTime};
use timeclock::core::attendance::{AttendanceService, ClockAction};
use timeclock::core::clock::FixedClock;
use timeclock::core::location::{FixedLocation, LocationProvider, NoLocation, Permission};
use timeclock::db::store::{MemoryStore, RecordStore};
use timeclock::errors::{AppError, AppResult};
use timeclock::models::{AttendanceRecord, DayStatus, LocationReading};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn office() -> LocationReading {
    LocationReading::new(45.5, 9.25, Some(20.0))
}

/// Grants permission, then fails every lookup; counts attempts.
#[derive(Default)]
struct FlakyLocation {
    calls: usize,
}

impl LocationProvider for FlakyLocation {
    fn request_permission(&mut self) -> Permission {
        Permission::Granted
    }

    fn current_reading(&mut self) -> AppResult<LocationReading> {
        self.calls += 1;
        Err(AppError::LocationUnavailable("no fix".into()))
    }
}

#[test]
fn test_clock_in_creates_record_for_today() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), FixedLocation(office()), &clock);

    let outcome = service.clock_in().unwrap();

    assert_eq!(outcome.action, ClockAction::In);
    assert_eq!(outcome.time, "09:00:00 AM");
    assert!(outcome.location_captured());
    assert_eq!(outcome.message(), "Clocked in at 09:00:00 AM at 45.5000, 9.2500");

    let records = service.store().load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], outcome.record);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
    assert_eq!(records[0].clock_in_location, Some(office()));
    assert!(records[0].clock_out_time.is_none());
    assert!(records[0].clock_out_location.is_none());

    assert_eq!(service.today_status(), DayStatus::ClockedIn);
}

#[test]
fn test_clock_in_then_out_counts_as_worked_day() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    service.clock_in().unwrap();
    clock.set(at("2026-10-14T17:30:00"));
    let out = service.clock_out().unwrap();

    assert_eq!(out.record.clock_in_time.as_deref(), Some("09:00:00 AM"));
    assert_eq!(out.record.clock_out_time.as_deref(), Some("05:30:00 PM"));
    assert_eq!(service.today_status(), DayStatus::ClockedOut);
    assert_eq!(service.calculate_hours(&out.record), "8h 30m");

    let week = service.current_week().unwrap();
    let summary = service.weekly_summary(&week);
    assert_eq!(summary.total_days_worked, 1);
    assert_eq!(summary.days_with_records, 1);
}

#[test]
fn test_second_clock_in_overwrites_only_clock_in_fields() {
    let clock = FixedClock::new(at("2026-10-14T08:00:00"));
    let seeded = vec![AttendanceRecord {
        date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        clock_in_time: Some("07:00:00 AM".into()),
        clock_out_time: Some("07:30:00 AM".into()),
        clock_in_location: None,
        clock_out_location: Some(office()),
    }];
    let mut store = MemoryStore::new();
    store.save_all(&seeded).unwrap();

    let mut service = AttendanceService::new(store, FixedLocation(office()), &clock);
    service.clock_in().unwrap();
    clock.advance(Duration::minutes(5));
    service.clock_in().unwrap();

    let records = service.store().load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].clock_in_time.as_deref(), Some("08:05:00 AM"));
    assert_eq!(records[0].clock_in_location, Some(office()));
    assert_eq!(records[0].clock_out_time.as_deref(), Some("07:30:00 AM"));
    assert_eq!(records[0].clock_out_location, Some(office()));
}

#[test]
fn test_repeated_clock_in_while_clocked_in_resets_time() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    service.clock_in().unwrap();
    clock.set(at("2026-10-14T09:45:30"));
    let again = service.clock_in().unwrap();

    assert_eq!(again.record.clock_in_time.as_deref(), Some("09:45:30 AM"));
    assert_eq!(service.store().load_all().unwrap().len(), 1);
    assert_eq!(service.today_status(), DayStatus::ClockedIn);
}

#[test]
fn test_clock_out_without_clock_in_is_rejected() {
    let clock = FixedClock::new(at("2026-10-14T17:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), FlakyLocation::default(), &clock);

    let err = service.clock_out().unwrap_err();
    assert!(matches!(err, AppError::NotClockedIn(ref d) if d == "2026-10-14"));

    // nothing written, no location requested
    assert!(service.store().raw().is_none());
    assert_eq!(service.location_provider().calls, 0);
    assert_eq!(service.today_status(), DayStatus::NotClockedIn);
}

#[test]
fn test_clock_out_only_looks_at_today() {
    let clock = FixedClock::new(at("2026-10-13T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);
    service.clock_in().unwrap();

    // yesterday's open record does not carry over
    clock.set(at("2026-10-14T17:00:00"));
    assert_eq!(service.today_status(), DayStatus::NotClockedIn);
    assert!(matches!(service.clock_out(), Err(AppError::NotClockedIn(_))));

    let records = service.store().load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].clock_out_time.is_none());
}

#[test]
fn test_clock_in_after_clock_out_keeps_old_clock_out() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    service.clock_in().unwrap();
    clock.set(at("2026-10-14T12:00:00"));
    service.clock_out().unwrap();
    clock.set(at("2026-10-14T13:00:00"));
    let reopened = service.clock_in().unwrap();

    // in-time is now later than the old out-time
    assert_eq!(reopened.record.clock_in_time.as_deref(), Some("01:00:00 PM"));
    assert_eq!(reopened.record.clock_out_time.as_deref(), Some("12:00:00 PM"));
    assert_eq!(service.today_status(), DayStatus::ClockedOut);

    clock.set(at("2026-10-14T18:00:00"));
    let closed = service.clock_out().unwrap();
    assert_eq!(closed.record.clock_out_time.as_deref(), Some("06:00:00 PM"));
    assert_eq!(service.calculate_hours(&closed.record), "5h 0m");
}

#[test]
fn test_location_failure_downgrades_to_unavailable() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), FlakyLocation::default(), &clock);

    let outcome = service.clock_in().unwrap();

    assert!(!outcome.location_captured());
    assert!(outcome.record.clock_in_location.is_none());
    assert_eq!(service.location_provider().calls, 1);
    assert_eq!(
        outcome.message(),
        "Clocked in at 09:00:00 AM (location unavailable)"
    );
}

#[test]
fn test_denied_permission_records_no_location() {
    let clock = FixedClock::new(at("2026-10-14T21:15:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    service.clock_in().unwrap();
    clock.set(at("2026-10-14T23:40:00"));
    let out = service.clock_out().unwrap();

    assert_eq!(out.message(), "Clocked out at 11:40:00 PM (location unavailable)");
    assert!(out.record.clock_out_location.is_none());
}

#[test]
fn test_empty_storage_reads_as_not_clocked_in() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    assert!(service.today_record().is_none());
    assert_eq!(service.today_status(), DayStatus::NotClockedIn);
    assert_eq!(service.current_week().unwrap().len(), 7);
}

#[test]
fn test_corrupt_storage_reads_as_empty_but_blocks_writes() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let store = MemoryStore::with_raw("{ definitely not an array");
    let mut service = AttendanceService::new(store, NoLocation, &clock);

    assert_eq!(service.today_status(), DayStatus::NotClockedIn);
    let week = service.current_week().unwrap();
    assert_eq!(service.weekly_summary(&week).days_with_records, 0);

    // the unreadable contents are never overwritten
    assert!(service.clock_in().is_err());
    assert_eq!(service.store().raw(), Some("{ definitely not an array"));
}

#[test]
fn test_write_failure_is_reported() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let store = MemoryStore::new().read_only();
    let mut service = AttendanceService::new(store, NoLocation, &clock);

    assert!(matches!(service.clock_in(), Err(AppError::Storage(_))));
    assert_eq!(service.today_status(), DayStatus::NotClockedIn);
}

#[test]
fn test_week_records_through_service() {
    let clock = FixedClock::new(at("2026-10-12T09:00:00"));
    let mut service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    service.clock_in().unwrap();
    clock.set(at("2026-10-12T17:00:00"));
    service.clock_out().unwrap();
    clock.set(at("2026-10-15T08:30:00"));
    service.clock_in().unwrap();

    let week = service
        .week_records(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())
        .unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, NaiveDate::from_ymd_opt(2026, 10, 11).unwrap());
    assert_eq!(week[1].badge(), "Complete");
    assert_eq!(week[4].badge(), "In Progress");
    assert_eq!(week[2].badge(), "No Record");
    assert_eq!(service.calculate_hours(&week[1]), "8h 0m");
    assert_eq!(service.calculate_hours(&week[4]), "-");

    let summary = service.weekly_summary(&week);
    assert_eq!(summary.total_days_worked, 1);
    assert_eq!(summary.days_with_records, 2);

    // the following week is empty
    let next = service
        .week_records(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
        .unwrap();
    assert_eq!(service.weekly_summary(&next).days_with_records, 0);
}

#[test]
fn test_week_outside_calendar_range_is_an_error() {
    let clock = FixedClock::new(at("2026-10-14T09:00:00"));
    let service = AttendanceService::new(MemoryStore::new(), NoLocation, &clock);

    assert!(matches!(
        service.week_records(NaiveDate::MAX),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        service.week_records(NaiveDate::MIN),
        Err(AppError::InvalidDate(_))
    ));
}
