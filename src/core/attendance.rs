//! Clock-in/clock-out logic over a [`RecordStore`].
//!
//! The service keeps no records of its own: every operation reads the
//! store's current snapshot and, for mutations, writes the full set back.

use crate::core::calculator::{calculate_hours, week_records, weekly_summary};
use crate::core::clock::Clock;
use crate::core::location::{self, LocationProvider};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, DayStatus, LocationReading, WeeklySummary};
use crate::utils::formatting::location_suffix;
use crate::utils::time::format_clock_time;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    In,
    Out,
}

impl ClockAction {
    pub fn label(&self) -> &'static str {
        match self {
            ClockAction::In => "Clocked in",
            ClockAction::Out => "Clocked out",
        }
    }

    /// Operation name used in the internal log.
    pub fn operation(&self) -> &'static str {
        match self {
            ClockAction::In => "clock_in",
            ClockAction::Out => "clock_out",
        }
    }
}

/// Result of a committed clock event.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOutcome {
    pub action: ClockAction,
    pub record: AttendanceRecord,
    pub time: String,
    pub location: Option<LocationReading>,
}

impl ClockOutcome {
    pub fn location_captured(&self) -> bool {
        self.location.is_some()
    }

    /// "Clocked in at 09:00:00 AM at 45.4642, 9.1900"
    pub fn message(&self) -> String {
        format!(
            "{} at {}{}",
            self.action.label(),
            self.time,
            location_suffix(self.location.as_ref())
        )
    }
}

pub struct AttendanceService<S, L, C> {
    store: S,
    location: L,
    clock: C,
}

impl<S, L, C> AttendanceService<S, L, C>
where
    S: RecordStore,
    L: LocationProvider,
    C: Clock,
{
    pub fn new(store: S, location: L, clock: C) -> Self {
        Self {
            store,
            location,
            clock,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn location_provider(&self) -> &L {
        &self.location
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Record a clock-in for today.
    ///
    /// An existing record for today gets its in-time and in-location
    /// replaced; its clock-out fields are left untouched.
    pub fn clock_in(&mut self) -> AppResult<ClockOutcome> {
        let now = self.clock.now();
        let date = now.date();
        let time = format_clock_time(now.time());
        let location = location::best_effort(&mut self.location);

        let record = self.store.update(|records| {
            let record = match records.iter_mut().find(|r| r.date == date) {
                Some(existing) => {
                    existing.clock_in_time = Some(time.clone());
                    existing.clock_in_location = location;
                    existing.clone()
                }
                None => {
                    let created = AttendanceRecord::clocked_in(date, time.clone(), location);
                    records.push(created.clone());
                    created
                }
            };
            Ok(record)
        })?;

        info!(%date, %time, located = location.is_some(), "clocked in");

        Ok(ClockOutcome {
            action: ClockAction::In,
            record,
            time,
            location,
        })
    }

    /// Record a clock-out for today.
    ///
    /// Rejected with [`AppError::NotClockedIn`] when today has no clock-in;
    /// in that case nothing is written and no location is requested.
    pub fn clock_out(&mut self) -> AppResult<ClockOutcome> {
        let now = self.clock.now();
        let date = now.date();
        let time = format_clock_time(now.time());

        let has_clock_in = self
            .store
            .load_all()?
            .iter()
            .find(|r| r.date == date)
            .is_some_and(|r| r.has_clock_in());
        if !has_clock_in {
            return Err(AppError::NotClockedIn(date.to_string()));
        }

        let location = location::best_effort(&mut self.location);

        let record = self.store.update(|records| {
            let existing = records
                .iter_mut()
                .find(|r| r.date == date)
                .filter(|r| r.has_clock_in())
                .ok_or_else(|| AppError::NotClockedIn(date.to_string()))?;

            existing.clock_out_time = Some(time.clone());
            existing.clock_out_location = location;
            Ok(existing.clone())
        })?;

        info!(%date, %time, located = location.is_some(), "clocked out");

        Ok(ClockOutcome {
            action: ClockAction::Out,
            record,
            time,
            location,
        })
    }

    /// Stored records, or none when storage cannot be read.
    fn snapshot(&self) -> Vec<AttendanceRecord> {
        match self.store.load_all() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "cannot read attendance records, treating storage as empty");
                Vec::new()
            }
        }
    }

    pub fn today_record(&self) -> Option<AttendanceRecord> {
        let today = self.clock.today();
        self.snapshot().into_iter().find(|r| r.date == today)
    }

    pub fn today_status(&self) -> DayStatus {
        self.today_record()
            .map(|r| r.status())
            .unwrap_or(DayStatus::NotClockedIn)
    }

    /// Seven records, Sunday→Saturday, for the week containing `reference`.
    pub fn week_records(&self, reference: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
        week_records(&self.snapshot(), reference)
            .ok_or_else(|| AppError::InvalidDate(format!("no full week around {}", reference)))
    }

    pub fn current_week(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.week_records(self.clock.today())
    }

    pub fn calculate_hours(&self, record: &AttendanceRecord) -> String {
        calculate_hours(
            record.clock_in_time.as_deref(),
            record.clock_out_time.as_deref(),
        )
    }

    pub fn weekly_summary(&self, week: &[AttendanceRecord]) -> WeeklySummary {
        weekly_summary(week)
    }
}
