//! Money formatting with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` values.

use rust_decimal::Decimal;

/// Formats an amount with exactly two decimal places, e.g. `12500.00`.
///
/// This is the canonical display form for table cells and CSV values.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Formats an amount as US dollars with thousands separators, e.g.
/// `$12,500.00`. Used for PDF rendering and summary display.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let formatted = format_amount(amount);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}
