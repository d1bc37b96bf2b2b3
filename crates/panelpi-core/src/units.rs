//! Display formatting for numbers, lengths and byte counts

/// Sentinel shown for unknown or not applicable values
pub const NOT_AVAILABLE: &str = "n/a";

const BYTE_UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a number the way the panel shows raw values
///
/// Whole numbers keep a single decimal (`12.0`), everything else uses the
/// shortest representation that round-trips (`120.5`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a length in millimeters, e.g. `48.0 mm`
pub fn format_millimeters(value_mm: f64) -> String {
    format!("{} mm", format_decimal(value_mm))
}

/// Format a byte count in binary units with one decimal
///
/// Values below 1024 are shown as plain bytes (`512 B`), larger values as
/// `1.5 KB`, `2.4 MB` and so on.
pub fn format_byte_count(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, BYTE_UNITS[unit])
}

/// Format a percentage, e.g. `42.5%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value))
}
