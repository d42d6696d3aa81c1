//! The GUI binary parses its arguments before opening a window, so `--help`
//! runs without a display.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn gui_shows_help() {
    let mut cmd = Command::cargo_bin("countries-gui").unwrap();
    cmd.env_remove("COUNTRIES_SOURCE").arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("/country/FRA"));
}
