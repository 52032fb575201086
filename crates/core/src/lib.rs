// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ontime-core: a daily time-of-day trigger driven by live inputs
//!
//! This crate provides:
//! - Observable hour, minute and weekday inputs
//! - A calendar trigger evaluated once per second against a clock
//! - A coordinator that rebuilds the trigger in place whenever an input changes
//! - Actions run when the trigger fires, and the TOML config that declares them

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod action;
pub mod clock;
pub mod config;
pub mod input;
pub mod registry;
pub mod schedule;

pub use action::{Action, ActionConfig, ActionError, ActionList, CommandAction, FnAction, LogAction};
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, ScheduleConfig};
pub use input::{InputError, InputValue, NumberInput, ObservableInput, SwitchInput};
pub use registry::{Component, ComponentRegistry};
pub use schedule::{
    CoordinatorState, CronTrigger, DiagnosticLine, ScheduleCoordinator, ScheduleInputs,
    ScheduleRule, WeekdayCode, WeekdayFlags,
};
