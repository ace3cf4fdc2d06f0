use assert_cmd::Command;

pub const TEST_SECRET: &str = "correct_horse_battery_staple_with_extra_length";

/// Create a command for the ironseal binary
pub fn ironseal() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ironseal"))
}

/// Create a seal command with the secret flag set
pub fn seal_command(secret: &str) -> Command {
    let mut cmd = ironseal();
    cmd.arg("seal").arg("--secret").arg(secret);
    cmd
}

/// Create an unseal command with the secret flag set
pub fn unseal_command(secret: &str) -> Command {
    let mut cmd = ironseal();
    cmd.arg("unseal").arg("--secret").arg(secret);
    cmd
}

/// Seal a payload via `--value` and return the token from stdout
pub fn seal_value(secret: &str, value: &str) -> String {
    let assert = seal_command(secret).arg("--value").arg(value).assert().success();
    String::from_utf8(assert.get_output().stdout.clone())
        .unwrap()
        .trim()
        .to_string()
}
