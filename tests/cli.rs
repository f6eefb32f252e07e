// tests/cli.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn unknown_arg_fails_with_diagnostic() {
    Command::cargo_bin("zip_scrape")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown arg: --bogus"));
}

#[test]
fn missing_out_value_fails() {
    Command::cargo_bin("zip_scrape")
        .unwrap()
        .arg("--out")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing output directory"));
}

#[test]
fn help_exits_clean() {
    Command::cargo_bin("zip_scrape")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage: zip_scrape"));
}
