//! Daemon logging specs
//!
//! Verify what the daemon reports on stderr while running.

use crate::prelude::*;

#[test]
fn startup_is_logged() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["quit"])
        .passes()
        .stderr_has("Starting ontimed")
        .stderr_has("ontimed stopped");
}

#[test]
fn every_change_dumps_diagnostics() {
    let temp = Project::with_config(MORNING_ALARM);

    let run = temp
        .daemon()
        .stdin_lines(&["hour 6", "tue on", "quit"])
        .passes()
        .stderr_has("Hour (source: 'Alarm hour'): 6")
        .stderr_has("Tue (source: 'Tuesday'): Yes");

    assert_eq!(run.stderr().matches("Cron trigger details:").count(), 3);
}

#[test]
fn unchanged_values_do_not_rebuild() {
    let temp = Project::with_config(MORNING_ALARM);

    let run = temp
        .daemon()
        .stdin_lines(&["hour 7", "mon on", "quit"])
        .passes();

    assert_eq!(run.stderr().matches("Cron trigger details:").count(), 1);
}

#[test]
fn rust_log_controls_verbosity() {
    let temp = Project::with_config(MORNING_ALARM);

    temp.daemon()
        .stdin_lines(&["quit"])
        .passes()
        .stderr_has("Starting ontimed");

    let run = temp
        .ontimed()
        .args(&["--config", CONFIG_FILE])
        .stdin_lines(&["quit"])
        .env("RUST_LOG", "warn")
        .passes();
    assert!(!run.stderr().contains("Starting ontimed"));
}
