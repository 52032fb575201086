//! Stdin command specs
//!
//! Verify that line commands change inputs and rebuild the schedule live.

use crate::prelude::*;

#[test]
fn quit_stops_the_daemon() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon().stdin_lines(&["quit"]).passes();
}

#[test]
fn dump_prints_inputs_and_schedule() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["dump", "quit"])
        .passes()
        .stdout_has("Hour (source: 'Alarm hour'): 7")
        .stdout_has("Minute (source: 'Alarm minute'): 30")
        .stdout_has("Mon (source: 'Alarm Monday'): Yes")
        .stdout_has("Tue (source: 'Tuesday'): No")
        .stdout_has("Schedule: sec=0 min=30 hour=7 dom=1-31 mon=1-12 dow=2,4,6")
        .stdout_has("Next run: ");
}

#[test]
fn minute_change_rebuilds_schedule() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["minute 45", "dump", "quit"])
        .passes()
        .stdout_has("Minute (source: 'Alarm minute'): 45")
        .stdout_has("Schedule: sec=0 min=45 hour=7 dom=1-31 mon=1-12 dow=2,4,6");
}

#[test]
fn weekday_commands_update_weekday_codes() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["mon off", "sun on", "sat toggle", "dump", "quit"])
        .passes()
        .stdout_has("dow=1,4,6,7");
}

#[test]
fn clearing_every_weekday_means_never() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["mon off", "wed off", "fri off", "dump", "quit"])
        .passes()
        .stdout_has("dow=none")
        .stdout_has("Next run: never");
}

#[test]
fn invalid_commands_are_reported_and_ignored() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["snooze", "hour 30", "minute 5", "dump", "quit"])
        .passes()
        .stderr_has("error: unknown command: snooze")
        .stderr_has("error: Alarm hour: value 30 outside 0..=23")
        .stdout_has("Schedule: sec=0 min=5 hour=7");
}

#[test]
fn fractional_hour_is_rejected() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["hour 7.6", "dump", "quit"])
        .passes()
        .stderr_has("error: Alarm hour: value 7.6 is not a multiple of 1 from 0")
        .stdout_has("Hour (source: 'Alarm hour'): 7")
        .stdout_has("Schedule: sec=0 min=30 hour=7 ");
}
