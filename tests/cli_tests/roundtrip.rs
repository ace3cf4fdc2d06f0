use crate::common::*;

#[test]
fn test_seal_unseal_roundtrip() {
    let token = seal_value(TEST_SECRET, "APP_KEY=test123");
    unseal_command(TEST_SECRET)
        .arg("--value")
        .arg(&token)
        .assert()
        .success()
        .stdout("APP_KEY=test123");
}

#[test]
fn test_roundtrip_via_stdin() {
    let assert = seal_command(TEST_SECRET)
        .write_stdin("piped through\n")
        .assert()
        .success();
    let token = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    unseal_command(TEST_SECRET)
        .write_stdin(token)
        .assert()
        .success()
        .stdout("piped through");
}

#[test]
fn test_stdin_payload_is_trimmed_of_surrounding_whitespace() {
    let assert = seal_command(TEST_SECRET)
        .write_stdin("  spaced out  \n")
        .assert()
        .success();
    let token = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    unseal_command(TEST_SECRET)
        .write_stdin(token)
        .assert()
        .success()
        .stdout("spaced out");
}

#[test]
fn test_roundtrip_with_ttl() {
    let assert = seal_command(TEST_SECRET)
        .arg("--value")
        .arg("short lived")
        .arg("--ttl")
        .arg("300")
        .assert()
        .success();
    let token = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let token = token.trim();

    unseal_command(TEST_SECRET)
        .arg("--value")
        .arg(token)
        .assert()
        .success()
        .stdout("short lived");
}
