//! Number formatting for card fields.
//!
//! Mirrors an en-US `toLocaleString`: comma thousands separators and at most
//! three fraction digits with trailing zeros dropped.

/// Group an integer with comma thousands separators.
///
/// # Examples
/// ```
/// use countrydeck::ui::format::group_thousands;
/// assert_eq!(group_thousands(67391582), "67,391,582");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Format a float with grouping and up to three fraction digits.
///
/// # Examples
/// ```
/// use countrydeck::ui::format::format_decimal;
/// assert_eq!(format_decimal(551695.0), "551,695");
/// assert_eq!(format_decimal(1234.5678), "1,234.568");
/// ```
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
