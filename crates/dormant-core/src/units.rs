//! Unit conversions and output formatting.
//!
//! All derived sizes come from the raw byte count by repeated division by
//! 1024, and every figure written to a report is rounded to two decimals.

use std::time::SystemTime;

use chrono::{DateTime, Local};

const KIB: f64 = 1024.0;

/// Bytes to KB.
pub fn to_kb(bytes: u64) -> f64 {
    bytes as f64 / KIB
}

/// Bytes to MB.
pub fn to_mb(bytes: u64) -> f64 {
    to_kb(bytes) / KIB
}

/// Bytes to GB.
pub fn to_gb(bytes: u64) -> f64 {
    to_mb(bytes) / KIB
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a timestamp as a local ISO-8601 date-time with microseconds.
pub fn format_timestamp(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
