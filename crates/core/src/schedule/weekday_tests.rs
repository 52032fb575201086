// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::weekday::*;
use chrono::Weekday;
use proptest::prelude::*;
use yare::parameterized;

fn codes(flags: [bool; 7]) -> Vec<u8> {
    translate(&WeekdayFlags::from(flags))
        .into_iter()
        .map(u8::from)
        .collect()
}

#[parameterized(
    nothing = { [false, false, false, false, false, false, false], &[] },
    everything = { [true, true, true, true, true, true, true], &[1, 2, 3, 4, 5, 6, 7] },
    monday_only = { [true, false, false, false, false, false, false], &[2] },
    sunday_only = { [false, false, false, false, false, false, true], &[1] },
    saturday_only = { [false, false, false, false, false, true, false], &[7] },
    weekend = { [false, false, false, false, false, true, true], &[1, 7] },
    working_week = { [true, true, true, true, true, false, false], &[2, 3, 4, 5, 6] },
    mon_wed_fri = { [true, false, true, false, true, false, false], &[2, 4, 6] },
)]
fn translates_flags(flags: [bool; 7], expected: &[u8]) {
    assert_eq!(codes(flags), expected);
}

#[test]
fn all_and_none_constructors() {
    assert!(WeekdayFlags::none().codes().is_empty());
    assert_eq!(WeekdayFlags::all().codes().len(), 7);
    assert_eq!(WeekdayFlags::all().count(), 7);
}

#[test]
fn every_combination_is_ascending_and_sized() {
    for bits in 0u8..128 {
        let flags: [bool; 7] = std::array::from_fn(|i| bits & (1 << i) != 0);
        let result = codes(flags);

        assert!(result.windows(2).all(|w| w[0] < w[1]), "{flags:?} -> {result:?}");
        assert!(result.iter().all(|c| (1..=7).contains(c)));
        assert_eq!(result.len(), flags.iter().filter(|f| **f).count());
    }
}

#[test]
fn code_matches_chrono_numbering() {
    assert_eq!(WeekdayCode::of(Weekday::Sun).get(), 1);
    assert_eq!(WeekdayCode::of(Weekday::Mon).get(), 2);
    assert_eq!(WeekdayCode::of(Weekday::Sat).get(), 7);

    let mut weekday = Weekday::Sun;
    for _ in 0..7 {
        assert_eq!(
            u32::from(WeekdayCode::of(weekday).get()),
            weekday.number_from_sunday()
        );
        weekday = weekday.succ();
    }
}

#[test]
fn code_rejects_out_of_range() {
    assert!(WeekdayCode::new(0).is_none());
    assert!(WeekdayCode::new(8).is_none());
    assert_eq!(WeekdayCode::new(3).map(WeekdayCode::get), Some(3));
}

proptest! {
    #[test]
    fn translated_codes_agree_with_is_set(flags in any::<[bool; 7]>()) {
        let flags = WeekdayFlags::from(flags);
        let result = flags.codes();

        for weekday in [
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun,
        ] {
            prop_assert_eq!(
                result.contains(&WeekdayCode::of(weekday)),
                flags.is_set(weekday)
            );
        }
        prop_assert_eq!(result.len(), flags.count());
    }
}
