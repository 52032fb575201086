// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input-driven daily schedule
//!
//! This module provides:
//! - **Weekday**: translation from Monday-first toggles to trigger weekday codes
//! - **ScheduleRule**: the calendar match sets of a trigger
//! - **CronTrigger**: rule evaluation against the clock, once per second
//! - **TriggerRebuilder**: in-place reconfiguration of trigger and binding
//! - **ScheduleCoordinator**: input subscriptions driving rebuilds

mod binding;
mod coordinator;
mod rebuild;
mod rule;
mod trigger;
mod weekday;

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod weekday_tests;





pub use binding::{ActionBinding, Automation};
pub use coordinator::{CoordinatorState, DiagnosticLine, ScheduleCoordinator, ScheduleInputs};
pub use rebuild::{InputSnapshot, TriggerRebuilder};
pub use rule::ScheduleRule;
pub use trigger::CronTrigger;
pub use weekday::{translate, WeekdayCode, WeekdayFlags};
