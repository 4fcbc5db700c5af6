//! Version and build stamp
//!
//! `build.rs` stamps every compile with a counter and a UTC time. The
//! `nutritrack_status` tool reports the stamp, and the server prints it to
//! stderr on startup so a client log shows which binary answered.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counter kept in `build_number.txt`; 0 when built without the build script
pub const BUILD_NUMBER: u64 = parse_build_number(option_env!("NUTRITRACK_BUILD_NUMBER"));

/// UTC compile time, `YYYY-MM-DDTHH:MM:SSZ`
pub const BUILD_TIMESTAMP: &str = match option_env!("NUTRITRACK_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Decimal digits only; anything else reads as build 0
const fn parse_build_number(raw: Option<&str>) -> u64 {
    let digits = match raw {
        Some(s) => s.as_bytes(),
        None => return 0,
    };
    let mut n: u64 = 0;
    let mut i = 0;
    while i < digits.len() {
        if !digits[i].is_ascii_digit() {
            return 0;
        }
        n = n * 10 + (digits[i] - b'0') as u64;
        i += 1;
    }
    n
}

/// The stamp reported alongside profile and process state in the status tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// One-line identification, e.g. `NutriTrack v1.0.0 (build 12, 2026-10-18T09:00:00Z)`
    pub fn banner(&self) -> String {
        format!(
            "NutriTrack v{} (build {}, {})",
            self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Print the build banner to stderr; stdout belongs to the MCP transport
pub fn print_startup_banner() {
    let banner = BuildInfo::current().banner();
    let rule = "=".repeat(banner.len());
    eprintln!("{}\n{}\n{}", rule, banner, rule);
}
