use crate::common::*;
use predicates::prelude::*;

// The reference interoperability vector: sealed by another implementation,
// must unseal here byte for byte.
const REFERENCE_SECRET: &str = "some_not_random_password_that_is_also_long_enough";
const REFERENCE_TOKEN: &str = "Fe26.2**0cdd607945dd1dffb7da0b0bf5f1a7daa6218cbae14cac51dcbd91fb077aeb5b*aOZLCKLhCt0D5IU1qLTtYw*g0ilNDlQ3TsdFUqJCqAm9iL7Wa60H7eYcHL_5oP136TOJREkS3BzheDC1dlxz5oJ**05b8943049af490e913bbc3a2485bee2aaf7b823f4c41d0ff0b7c168371a3772*R8yscVdTBRMdsoVbdDiFmUL8zb-c3PQLGJn4Y8C-AqI";

#[test]
fn test_unseal_reference_token() {
    unseal_command(REFERENCE_SECRET)
        .arg("--value")
        .arg(REFERENCE_TOKEN)
        .assert()
        .success()
        .stdout(r#"{"a":1,"b":2,"c":[3,4,5],"d":{"e":"f"}}"#);
}

#[test]
fn test_unseal_rejects_garbage() {
    unseal_command(TEST_SECRET)
        .arg("--value")
        .arg("not-a-token")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect number of sealed components"));
}

#[test]
fn test_unseal_rejects_a_tampered_token() {
    let token = seal_value(TEST_SECRET, "authentic");

    let mut parts: Vec<String> = token.split('*').map(str::to_string).collect();
    let mut body = parts[4].clone().into_bytes();
    body[0] = if body[0] == b'A' { b'B' } else { b'A' };
    parts[4] = String::from_utf8(body).unwrap();
    let tampered = parts.join("*");

    unseal_command(TEST_SECRET)
        .arg("--value")
        .arg(&tampered)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad hmac value"));
}

#[test]
fn test_unseal_with_the_wrong_secret_fails() {
    let token = seal_value(TEST_SECRET, "for someone else");
    unseal_command(REFERENCE_SECRET)
        .arg("--value")
        .arg(&token)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad hmac value"));
}

#[test]
fn test_unseal_reads_token_from_stdin() {
    let token = seal_value(TEST_SECRET, "via stdin");
    unseal_command(TEST_SECRET)
        .write_stdin(format!("{}\n", token))
        .assert()
        .success()
        .stdout("via stdin");
}
