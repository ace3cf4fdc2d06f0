use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let manifest = fs::read_to_string(Path::new(&manifest_dir).join("Cargo.toml"))
        .expect("Failed to read Cargo.toml");

    // Look for: release-date = "YYYY-MM-DD" under [package.metadata]
    for line in manifest.lines() {
        if let Some(rest) = line.trim().strip_prefix("release-date") {
            if let Some(date) = rest.split('"').nth(1) {
                println!("cargo:rustc-env=RELEASE_DATE={}", date);
                return;
            }
        }
    }

    panic!("release-date not found in [package.metadata] in Cargo.toml");
}
