//! Number and text formatting helpers shared by widgets.

/// Decimal places of the cross rate column.
pub const RATE_DECIMALS: usize = 6;

/// Decimal places of the bought amount.
pub const AMOUNT_DECIMALS: usize = 4;

/// Placeholder for values that cannot be displayed.
pub const NOT_AVAILABLE: &str = "-";

/// Format a float with thousands separators and a fixed number of decimals.
///
/// Non-finite values render as [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_grouped(1234.5, 2), "1,234.50");
/// assert_eq!(format_grouped(f64::NAN, 2), "-");
/// ```
#[must_use]
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let negative = value < 0.0 && fixed.chars().any(|c| matches!(c, '1'..='9'));
    let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(integer));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Cross rate, six decimals with separators.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format_grouped(rate, RATE_DECIMALS)
}

/// The amount column: raw sold amount, then the bought amount at four decimals.
///
/// The sold amount uses the shortest round-trip decimal form and never an
/// exponent, so `1e-7` prints as `0.0000001`.
#[must_use]
pub fn format_amounts(from_amount: f64, to_amount: f64) -> String {
    format!("{from_amount}/{}", format_grouped(to_amount, AMOUNT_DECIMALS))
}

/// Shorten a long string by keeping its head and tail.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_middle("0123456789", 8), "012...89");
/// ```
#[must_use]
pub fn truncate_middle(text: &str, max_len: usize) -> String {
    let len = text.chars().count();
    if len <= max_len || max_len < 5 {
        return text.to_string();
    }

    let keep = max_len - 3;
    let head = keep.div_ceil(2);
    let tail = keep - head;
    let start: String = text.chars().take(head).collect();
    let end: String = text.chars().skip(len - tail).collect();
    format!("{start}...{end}")
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Tests
// ============================================================================
