//! Display Formatting
//!
//! Helpers exposed to markup for rendering sizes and durations.

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Base-1024 size with up to two decimals, e.g. `1536` -> `"1.5 KB"`.
/// Sizes past the GB range stay in GB.
/// Fractional byte counts are kept; zero, negative and NaN inputs give `"0 Bytes"`.
pub fn format_file_size(bytes: f64) -> String {
    if bytes.is_nan() || bytes <= 0.0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024f64.powi(unit as i32 + 1) {
        unit += 1;
    }
    let scaled = bytes / 1024f64.powi(unit as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// `minutes:seconds` with zero-padded seconds, e.g. `65.0` -> `"1:05"`
pub fn format_duration(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor() as i64;
    let secs = (seconds % 60.0).floor() as i64;
    format!("{}:{:02}", mins, secs)
}
