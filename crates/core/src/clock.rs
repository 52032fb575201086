// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction for testable schedule evaluation
//!
//! A clock may not know the time yet (e.g. before the first network sync on
//! a device), so `now` returns `None` until a valid time is available.

use chrono::{Duration, Local, NaiveDateTime};
use std::sync::{Arc, Mutex};

/// A clock that provides the current local wall-clock time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Option<NaiveDateTime>;
}

/// Real system clock, always valid
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<NaiveDateTime> {
        Some(Local::now().naive_local())
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Option<NaiveDateTime>>>,
}

impl FakeClock {
    /// A clock that has not been synchronized yet
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// A clock already set to the given time
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(Some(time))),
        }
    }

    /// Advance the clock by the given duration (no-op while unset)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(time) = current.as_mut() {
            *time += duration;
        }
    }

    /// Set the clock to a specific time
    pub fn set(&self, time: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(time);
    }

    /// Forget the current time, as if synchronization was lost
    pub fn invalidate(&self) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = None;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Option<NaiveDateTime> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
