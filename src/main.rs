//! formguard CLI entry point
//!
//! Minimal by design: parse, dispatch, print errors to stderr, exit non-zero
//! on failure. All logic lives in the cli module.

use formguard::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
