use chrono::{DateTime, NaiveDateTime};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable byte count with 1024-based units, rounded to two decimals
/// with trailing zeros trimmed. `format_file_size(0)` is `"0 Bytes"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[exponent])
}

/// Seconds to `H:MM:SS`, or `M:SS` under one hour.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Parses a server timestamp (RFC 3339, or sqlite's `YYYY-MM-DD HH:MM:SS`)
/// and renders it in a uniform local-style form. `None` when unparseable;
/// callers fall back to the raw string.
pub fn format_date(input: &str) -> Option<String> {
    let naive = DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
        .ok()?;
    Some(naive.format("%Y-%m-%d %H:%M:%S").to_string())
}
