use crate::common::*;
use predicates::prelude::*;

#[test]
fn test_seal_without_secret_fails() {
    ironseal()
        .arg("seal")
        .arg("--value")
        .arg("anything")
        .assert()
        .failure();
}

#[test]
fn test_seal_with_short_secret_fails() {
    seal_command("too-short")
        .arg("--value")
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret must be at least 32 bytes"));
}

#[test]
fn test_unseal_with_short_secret_fails() {
    unseal_command("too-short")
        .arg("--value")
        .arg("anything")
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret must be at least 32 bytes"));
}

#[test]
fn test_errors_are_prefixed_on_stderr() {
    unseal_command(TEST_SECRET)
        .arg("--value")
        .arg("Fe27.2*******")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}
