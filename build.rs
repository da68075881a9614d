//! Build script for FitPlan
//!
//! Bumps the build number and embeds it with a UTC timestamp.

use std::fs;
use std::path::Path;

const BUILD_NUMBER_FILE: &str = "build_number.txt";

fn read_build_number(path: &Path) -> u64 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn main() {
    println!("cargo:rerun-if-changed=src");

    let path = Path::new(BUILD_NUMBER_FILE);
    let build = read_build_number(path) + 1;
    if let Err(e) = fs::write(path, build.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=FITPLAN_BUILD_NUMBER={}", build);
    println!("cargo:rustc-env=FITPLAN_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:warning=FitPlan Build #{} at {}", build, timestamp);
}
