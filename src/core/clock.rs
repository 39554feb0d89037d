//! Wall-clock and display-tick sources, injected instead of read globally.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::cell::Cell;
use std::thread;
use std::time::Duration;

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Local time of the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant; can be moved explicitly.
#[derive(Debug)]
pub struct FixedClock {
    at: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at: Cell::new(at) }
    }

    pub fn set(&self, at: NaiveDateTime) {
        self.at.set(at);
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.at.set(self.at.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at.get()
    }
}

/// Drives a periodic redraw. Returns `false` once the view must stop.
pub trait Ticker {
    fn tick(&mut self) -> bool;
}

/// Fires immediately, then once per `interval`, for at most `ticks` times.
#[derive(Debug)]
pub struct IntervalTicker {
    interval: Duration,
    remaining: u32,
    started: bool,
}

impl IntervalTicker {
    pub fn new(interval: Duration, ticks: u32) -> Self {
        Self {
            interval,
            remaining: ticks,
            started: false,
        }
    }

    pub fn every_second(ticks: u32) -> Self {
        Self::new(Duration::from_secs(1), ticks)
    }

    /// Stop before the next redraw.
    pub fn cancel(&mut self) {
        self.remaining = 0;
    }
}

impl Ticker for IntervalTicker {
    fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        if self.started && !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        self.started = true;
        self.remaining -= 1;
        true
    }
}
