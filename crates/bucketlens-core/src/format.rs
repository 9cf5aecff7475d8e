//! Human-readable byte sizes.

/// Decimal (SI) units used above 999 bytes, smallest first.
pub const SIZE_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const THRESHOLD: f64 = 1000.0;

/// Format a byte count as a whole number of the largest fitting SI unit.
///
/// Values below 1000 in magnitude are printed as bytes. Larger values are
/// divided by 1000 until the magnitude, rounded to one decimal place, drops
/// below 1000 or the largest unit (`YB`) is reached. The final value is
/// rounded to the nearest integer, half away from zero. Negative values keep
/// their sign.
///
/// # Examples
///
/// ```
/// use bucketlens_core::human_readable_size;
///
/// assert_eq!(human_readable_size(999.0), "999 B");
/// assert_eq!(human_readable_size(1000.0), "1 kB");
/// assert_eq!(human_readable_size(1_500_000.0), "2 MB");
/// assert_eq!(human_readable_size(-2048.0), "-2 kB");
/// ```
#[must_use]
pub fn human_readable_size(bytes: f64) -> String {
    if bytes.abs() < THRESHOLD {
        // `+ 0.0` turns a rounded `-0.0` into `0.0`.
        return format!("{} B", bytes.round() + 0.0);
    }

    let mut value = bytes;
    let mut unit = 0;
    loop {
        value /= THRESHOLD;
        if round_to_tenth(value.abs()) < THRESHOLD || unit == SIZE_UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }

    format!("{} {}", value.round(), SIZE_UNITS[unit])
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
