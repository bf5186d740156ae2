use chrono::NaiveDate;

/// Bytes per decimal gigabyte (10^9).
pub const BYTES_PER_GB: f64 = 1_000_000_000.0;

/// Canonical date pattern used both for parsing and for report cells.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Round `value` to `decimals` places.
///
/// Rounds the exact binary value, ties to even, so `0.015` (stored just
/// below the half) becomes `0.01` and `0.125` becomes `0.12`. Negative zero
/// comes back as `0.0`.
///
/// # Examples
///
/// ```
/// use traffic_core::formatting::round_to;
///
/// assert_eq!(round_to(5.004, 2), 5.0);
/// assert_eq!(round_to(1.239, 2), 1.24);
/// assert_eq!(round_to(0.015, 2), 0.01);
/// assert_eq!(round_to(-0.126, 2), -0.13);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let rounded = format!("{:.*}", decimals as usize, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a raw byte count into decimal gigabytes rounded to two places.
///
/// # Examples
///
/// ```
/// use traffic_core::formatting::bytes_to_gb;
///
/// assert_eq!(bytes_to_gb(5_000_000_000), 5.0);
/// assert_eq!(bytes_to_gb(1_234_567_890), 1.23);
/// assert_eq!(bytes_to_gb(0), 0.0);
/// ```
pub fn bytes_to_gb(bytes: i64) -> f64 {
    round_to(bytes as f64 / BYTES_PER_GB, 2)
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an integer with comma thousands separators.
///
/// # Examples
///
/// ```
/// use traffic_core::formatting::format_count;
///
/// assert_eq!(format_count(5_000_000_000), "5,000,000,000");
/// assert_eq!(format_count(-1234), "-1,234");
/// assert_eq!(format_count(999), "999");
/// ```
pub fn format_count(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
