// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weekday toggles and the trigger's weekday numbering
//!
//! Inputs are ordered Monday first, while the trigger numbers days
//! Sunday first (1 = Sunday .. 7 = Saturday).

use chrono::Weekday;
use std::fmt;

/// Trigger-side weekday number in `1..=7`, Sunday = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekdayCode(u8);

impl WeekdayCode {
    pub fn new(code: u8) -> Option<Self> {
        (1..=7).contains(&code).then_some(Self(code))
    }

    pub fn of(weekday: Weekday) -> Self {
        Self(match weekday {
            Weekday::Sun => 1,
            Weekday::Mon => 2,
            Weekday::Tue => 3,
            Weekday::Wed => 4,
            Weekday::Thu => 5,
            Weekday::Fri => 6,
            Weekday::Sat => 7,
        })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for WeekdayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<WeekdayCode> for u8 {
    fn from(code: WeekdayCode) -> Self {
        code.0
    }
}

/// Seven weekday toggles in input order (Monday first)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayFlags {
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub sun: bool,
}

impl WeekdayFlags {
    pub fn new(mon: bool, tue: bool, wed: bool, thu: bool, fri: bool, sat: bool, sun: bool) -> Self {
        Self {
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self::from([true; 7])
    }

    /// Whether the toggle for `weekday` is on
    pub fn is_set(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }

    /// Number of toggles that are on
    pub fn count(&self) -> usize {
        <[bool; 7]>::from(*self).iter().filter(|set| **set).count()
    }

    /// Translate the toggles into the trigger's weekday set
    pub fn codes(&self) -> Vec<WeekdayCode> {
        translate(self)
    }
}

impl From<[bool; 7]> for WeekdayFlags {
    /// Monday-first array
    fn from(flags: [bool; 7]) -> Self {
        let [mon, tue, wed, thu, fri, sat, sun] = flags;
        Self::new(mon, tue, wed, thu, fri, sat, sun)
    }
}

impl From<WeekdayFlags> for [bool; 7] {
    fn from(flags: WeekdayFlags) -> Self {
        [
            flags.mon, flags.tue, flags.wed, flags.thu, flags.fri, flags.sat, flags.sun,
        ]
    }
}

/// Produce the ascending weekday codes whose toggle is on
pub fn translate(flags: &WeekdayFlags) -> Vec<WeekdayCode> {
    let sunday_first = [
        flags.sun, flags.mon, flags.tue, flags.wed, flags.thu, flags.fri, flags.sat,
    ];

    sunday_first
        .into_iter()
        .zip(1u8..=7)
        .filter_map(|(set, code)| set.then_some(WeekdayCode(code)))
        .collect()
}
