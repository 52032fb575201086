//! `ontimed --check` specs
//!
//! Verify config validation and the printed schedule summary.

use crate::prelude::*;

#[test]
fn check_prints_schedule_and_next_run() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .args(&["--check"])
        .passes()
        .stdout_has("Schedule: sec=0 min=30 hour=7 dom=1-31 mon=1-12 dow=2,4,6")
        .stdout_has("Next run: ")
        .stdout_lacks("Next run: never");
}

#[test]
fn check_without_weekdays_never_runs() {
    let temp = Project::with_config("");

    temp.daemon()
        .args(&["--check"])
        .passes()
        .stdout_eq("Schedule: sec=0 min=0 hour=0 dom=1-31 mon=1-12 dow=none\nNext run: never\n");
}

#[test]
fn check_logs_diagnostics_to_stderr() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .args(&["--check"])
        .passes()
        .stderr_has("Cron trigger details:")
        .stderr_has("Hour (source: 'Alarm hour'): 7")
        .stderr_has("Wed (source: 'Wednesday'): Yes")
        .stderr_has("Sun (source: 'Sunday'): No");
}

#[test]
fn check_rejects_hour_out_of_range() {
    let temp = Project::with_config("[hour]\ninitial = 24\n");

    temp.daemon()
        .args(&["--check"])
        .fails()
        .stderr_has("hour.initial: initial value 24 outside 0..=23");
}

#[test]
fn check_rejects_zero_tick_interval() {
    let temp = Project::with_config("tick_interval = \"0s\"\n");

    temp.daemon()
        .args(&["--check"])
        .fails()
        .stderr_has("tick_interval must be greater than zero");
}

#[test]
fn check_rejects_malformed_toml() {
    let temp = Project::with_config("[hour\n");

    temp.daemon()
        .args(&["--check"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn check_reports_missing_config() {
    let temp = Project::empty();

    temp.daemon()
        .args(&["--check"])
        .fails()
        .stderr_has("failed to read");
}
