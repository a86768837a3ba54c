use carbon_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats a [`Decimal`] rounded half-up to exactly `dp` decimal places.
pub fn format_decimal(
    value: Decimal,
    dp: u32,
) -> String {
    format!("{:.*}", dp as usize, round_half_up(value, dp))
}

/// Formats a [`Decimal`] as a whole number with comma thousands separators
/// (e.g. `"4,208"`).
pub fn format_whole_with_commas(value: Decimal) -> String {
    let digits = format_decimal(value.abs(), 0);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value.is_sign_negative() && grouped != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

/// Formats a byte count using binary units (`"512 B"`, `"1.5 KB"`, `"2.0 MB"`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}
