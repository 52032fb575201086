// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar match rule for the cron trigger
//!
//! A rule is six independent sets: seconds, minutes, hours, days of month,
//! months and weekdays. A moment matches when every one of its fields is in
//! the corresponding set. An empty set never matches.

use super::weekday::WeekdayCode;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::collections::BTreeSet;
use std::fmt;

/// How far `next_match_after` looks ahead (covers leap-day rules)
const SEARCH_DAYS: u32 = 4 * 366;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRule {
    seconds: BTreeSet<u8>,
    minutes: BTreeSet<u8>,
    hours: BTreeSet<u8>,
    days_of_month: BTreeSet<u8>,
    months: BTreeSet<u8>,
    weekdays: BTreeSet<u8>,
}

impl ScheduleRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_second(&mut self, second: u8) {
        self.seconds.insert(second);
    }

    pub fn add_minute(&mut self, minute: u8) {
        self.minutes.insert(minute);
    }

    pub fn add_hour(&mut self, hour: u8) {
        self.hours.insert(hour);
    }

    pub fn add_day_of_month(&mut self, day: u8) {
        self.days_of_month.insert(day);
    }

    pub fn add_days_of_month(&mut self, days: impl IntoIterator<Item = u8>) {
        self.days_of_month.extend(days);
    }

    pub fn add_month(&mut self, month: u8) {
        self.months.insert(month);
    }

    pub fn add_months(&mut self, months: impl IntoIterator<Item = u8>) {
        self.months.extend(months);
    }

    pub fn add_weekday(&mut self, weekday: WeekdayCode) {
        self.weekdays.insert(weekday.get());
    }

    pub fn add_weekdays(&mut self, weekdays: impl IntoIterator<Item = WeekdayCode>) {
        self.weekdays.extend(weekdays.into_iter().map(WeekdayCode::get));
    }

    /// Remove every entry from every set
    pub fn clear(&mut self) {
        self.seconds.clear();
        self.minutes.clear();
        self.hours.clear();
        self.days_of_month.clear();
        self.months.clear();
        self.weekdays.clear();
    }

    pub fn seconds(&self) -> &BTreeSet<u8> {
        &self.seconds
    }

    pub fn minutes(&self) -> &BTreeSet<u8> {
        &self.minutes
    }

    pub fn hours(&self) -> &BTreeSet<u8> {
        &self.hours
    }

    pub fn days_of_month(&self) -> &BTreeSet<u8> {
        &self.days_of_month
    }

    pub fn months(&self) -> &BTreeSet<u8> {
        &self.months
    }

    pub fn weekdays(&self) -> &BTreeSet<u8> {
        &self.weekdays
    }

    /// True when some set is empty, so no moment can ever match
    pub fn never_matches(&self) -> bool {
        [
            &self.seconds,
            &self.minutes,
            &self.hours,
            &self.days_of_month,
            &self.months,
            &self.weekdays,
        ]
        .iter()
        .any(|set| set.is_empty())
    }

    pub fn matches(&self, moment: &NaiveDateTime) -> bool {
        self.matches_date(moment.date())
            && contains(&self.hours, moment.hour())
            && contains(&self.minutes, moment.minute())
            && contains(&self.seconds, moment.second())
    }

    fn matches_date(&self, date: NaiveDate) -> bool {
        contains(&self.days_of_month, date.day())
            && contains(&self.months, date.month())
            && self
                .weekdays
                .contains(&WeekdayCode::of(date.weekday()).get())
    }

    /// The earliest matching moment strictly after `after`
    pub fn next_match_after(&self, after: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.never_matches() {
            return None;
        }

        let mut day = after.date();
        for _ in 0..SEARCH_DAYS {
            if self.matches_date(day) {
                for &hour in &self.hours {
                    for &minute in &self.minutes {
                        for &second in &self.seconds {
                            let Some(candidate) =
                                day.and_hms_opt(hour.into(), minute.into(), second.into())
                            else {
                                continue;
                            };
                            if candidate > after {
                                return Some(candidate);
                            }
                        }
                    }
                }
            }
            day = day.succ_opt()?;
        }
        None
    }
}

fn contains(set: &BTreeSet<u8>, value: u32) -> bool {
    u8::try_from(value).is_ok_and(|v| set.contains(&v))
}

/// Render a set as `none`, `a-b` for a contiguous run, or a comma list
fn format_set(set: &BTreeSet<u8>) -> String {
    match (set.first(), set.last()) {
        (Some(first), Some(last)) if set.len() > 2 && usize::from(last - first) + 1 == set.len() => {
            format!("{}-{}", first, last)
        }
        (Some(_), Some(_)) => set
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(","),
        _ => "none".to_string(),
    }
}

impl fmt::Display for ScheduleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sec={} min={} hour={} dom={} mon={} dow={}",
            format_set(&self.seconds),
            format_set(&self.minutes),
            format_set(&self.hours),
            format_set(&self.days_of_month),
            format_set(&self.months),
            format_set(&self.weekdays),
        )
    }
}
