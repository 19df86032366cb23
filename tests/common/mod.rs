// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Amounts with their expected check wording
pub const SCENARIOS: &[(f64, &str)] = &[
    (0.0, "zero and 00/100"),
    (1.0, "one and 00/100"),
    (10.0, "ten and 00/100"),
    (100.0, "one hundred and 00/100"),
    (200.0, "two hundred and 00/100"),
    (300.0, "three hundred and 00/100"),
    (123.45, "one hundred twenty-three and 45/100"),
    (100.01, "one hundred and 01/100"),
    (1000.0, "one thousand and 00/100"),
    (1234.56, "one thousand two hundred thirty-four and 56/100"),
    (0.05, "zero and 05/100"),
    (0.1, "zero and 10/100"),
];

/// Whole numbers spread across every scale group
pub fn sample_whole_numbers() -> Vec<u64> {
    let mut samples: Vec<u64> = (0..=1100).collect();
    let mut n: u64 = 1;
    while n < 1_000_000_000_000_000 {
        samples.extend([n, n + 1, n * 7 + 13, n * 999 / 7]);
        n *= 10;
    }
    samples.retain(|&s| s <= 999_999_999_999_999);
    samples
}

/// Helper to write a fixture file into a fresh temporary directory
pub fn write_fixture(name: &str, contents: &str) -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(name);
    fs::write(&path, contents)?;
    Ok((path, temp_dir))
}
