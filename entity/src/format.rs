//! Display formatting shared by entity helpers.

use rust_decimal::Decimal;

/// Formats an amount as dollars with thousands separators and two decimals,
/// e.g. `1234.5` becomes `$1,234.50`.
///
/// Rounding is banker's rounding, the same as the stored decimal columns use.
pub fn currency(amount: &Decimal) -> String {
    let rounded = amount.round_dp(2);
    let formatted = format!("{:.2}", rounded.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("${}{}.{}", sign, group_thousands(whole), fraction)
}

/// Share of `part` in `total` as a percentage rounded to one decimal place,
/// ties to even.
///
/// Returns `0.0` when `total` is zero.
pub fn percentage(part: i32, total: i32) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let ratio = f64::from(part) / f64::from(total) * 100.0;
    (ratio * 10.0).round_ties_even() / 10.0
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
