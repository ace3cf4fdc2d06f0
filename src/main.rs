#[cfg(feature = "cli")]
use ironseal::cli;

#[cfg(feature = "cli")]
fn main() {
    if let Err(e) = cli::run(std::env::args()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("Error: the 'cli' feature is required for the binary");
    std::process::exit(1);
}
