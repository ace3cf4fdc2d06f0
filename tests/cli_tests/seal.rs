use crate::common::*;
use predicates::prelude::*;

#[test]
fn test_seal_with_value_prints_a_token() {
    seal_command(TEST_SECRET)
        .arg("--value")
        .arg("hello world")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fe26.2**"));
}

#[test]
fn test_sealed_token_has_no_expiration_without_ttl() {
    let token = seal_value(TEST_SECRET, "no expiry");
    let parts: Vec<&str> = token.split('*').collect();
    assert_eq!(parts.len(), 8);
    assert_eq!(parts[5], "");
}

#[test]
fn test_seal_with_ttl_embeds_an_expiration() {
    let assert = seal_command(TEST_SECRET)
        .arg("--value")
        .arg("expiring")
        .arg("--ttl")
        .arg("60")
        .assert()
        .success();

    let token = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let token = token.trim();
    let parts: Vec<&str> = token.split('*').collect();
    assert!(parts[5].parse::<i64>().is_ok(), "expiration field should be decimal milliseconds");
}

#[test]
fn test_seal_reads_payload_from_stdin() {
    seal_command(TEST_SECRET)
        .write_stdin("piped payload\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fe26.2**"));
}
