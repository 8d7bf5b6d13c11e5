use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_pack-filter"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pack-filter"))
        .stdout(predicate::str::contains("--ignore"));
}

#[test]
fn requires_name() {
    Command::new(env!("CARGO_BIN_EXE_pack-filter"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn module_filter_needs_prune() {
    Command::new(env!("CARGO_BIN_EXE_pack-filter"))
        .args(["--name", "app", "--module-filter"])
        .assert()
        .failure();
}
