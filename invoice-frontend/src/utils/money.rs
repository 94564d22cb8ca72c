//! Numeric input coercion and Rupiah display formatting.

use crate::services::pricing::round_money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a quantity field. Invalid or empty input becomes 0; a decimal value
/// is truncated toward zero.
pub fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(quantity) = raw.parse::<i64>() {
        return quantity;
    }
    Decimal::from_str(raw)
        .ok()
        .and_then(|value| value.trunc().to_i64())
        .unwrap_or(0)
}

/// Parse a price field. Invalid or empty input becomes 0.
pub fn parse_price(raw: &str) -> Decimal {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

/// Format an amount the way `id-ID` locales display IDR, e.g. `Rp 10.000,00`.
pub fn format_idr(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let digits = magnitude.to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}Rp {},{}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Plain editable representation of a price, without trailing zeros.
pub fn price_input_value(price: Decimal) -> String {
    price.normalize().to_string()
}
