use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("hype")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("genres"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_exec_help_lists_options() {
    cargo_bin_cmd!("hype")
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--team"))
        .stdout(predicate::str::contains("--passcode"))
        .stdout(predicate::str::contains("--genre"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("hype")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hype"));
}
