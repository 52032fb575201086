//! CLI help and argument specs

use crate::prelude::*;

#[test]
fn help_lists_options() {
    let temp = Project::empty();

    temp.ontimed()
        .args(&["--help"])
        .passes()
        .stdout_has("--config")
        .stdout_has("--check");
}

#[test]
fn version_is_printed() {
    let temp = Project::empty();

    temp.ontimed()
        .args(&["--version"])
        .passes()
        .stdout_has("ontimed");
}

#[test]
fn config_is_required() {
    let temp = Project::empty();

    temp.ontimed().fails().stderr_has("--config");
}
