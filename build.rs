//! Stamps each NutriTrack compile with a build counter and UTC time.
//!
//! The counter persists in `build_number.txt` at the crate root; both values
//! reach the crate as `NUTRITRACK_BUILD_NUMBER` and `NUTRITRACK_BUILD_TIMESTAMP`.

use std::fs;
use std::path::Path;

const COUNTER_FILE: &str = "build_number.txt";

fn next_build_number(counter: &Path) -> u64 {
    let previous = fs::read_to_string(counter)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    previous + 1
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let counter = Path::new(COUNTER_FILE);
    let build_number = next_build_number(counter);
    if let Err(e) = fs::write(counter, build_number.to_string()) {
        println!("cargo:warning=could not update {}: {}", COUNTER_FILE, e);
    }

    let stamped_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    println!("cargo:rustc-env=NUTRITRACK_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=NUTRITRACK_BUILD_TIMESTAMP={}", stamped_at);
}
