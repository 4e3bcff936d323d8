//! `Decimal` display helpers: KRW amounts, percentages, coin volumes.

use super::num::{group_thousands, trim_fraction};
use rust_decimal::{Decimal, RoundingStrategy};

fn fixed(value: &Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1$}", rounded, dp as usize)
}

/// Whole-won amount with grouping: `60000000` → `"₩60,000,000"`.
pub fn krw(value: &Decimal) -> String {
    let rendered = fixed(value, 0);
    match rendered.strip_prefix('-') {
        Some(abs) => format!("-₩{}", group_thousands(abs)),
        None => format!("₩{}", group_thousands(&rendered)),
    }
}

/// Grouped number without a currency sign, trailing zeros trimmed.
pub fn grouped(value: &Decimal, max_dp: u32) -> String {
    let rendered = fixed(value, max_dp);
    group_thousands(trim_fraction(&rendered))
}

/// Percentage with two decimals and an explicit `+` for gains.
pub fn signed_percent(value: &Decimal) -> String {
    let rendered = fixed(value, 2);
    if value.is_sign_positive() && !value.is_zero() {
        format!("+{}%", rendered)
    } else {
        format!("{}%", rendered)
    }
}

/// Coin quantity with a fixed number of decimals (8 for balances, 4 for fills).
pub fn volume(value: &Decimal, dp: u32) -> String {
    fixed(value, dp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_krw() {
        assert_eq!(krw(&d("60000000")), "₩60,000,000");
        assert_eq!(krw(&d("1234.5")), "₩1,235");
        assert_eq!(krw(&d("0")), "₩0");
        assert_eq!(krw(&d("-1500")), "-₩1,500");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(&d("1234567.891"), 2), "1,234,567.89");
        assert_eq!(grouped(&d("100.00"), 2), "100");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(&d("20")), "+20.00%");
        assert_eq!(signed_percent(&d("-3.456")), "-3.46%");
        assert_eq!(signed_percent(&d("0")), "0.00%");
    }

    #[test]
    fn test_volume() {
        assert_eq!(volume(&d("1"), 8), "1.00000000");
        assert_eq!(volume(&d("0.123456789"), 8), "0.12345679");
        assert_eq!(volume(&d("2.5"), 4), "2.5000");
    }
}
