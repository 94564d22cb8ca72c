//! Subtotal, tax and total derivation for a single invoice line.
//!
//! All amounts are rounded to two decimal places with
//! [`RoundingStrategy::MidpointAwayFromZero`]. With that mode rounding
//! `subtotal + tax` gives the same result as adding `tax` to the rounded
//! subtotal, because `tax` already carries two decimals and shares the sign
//! of `subtotal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed VAT rate (PPN 11%).
pub const TAX_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 2);

const MONEY_SCALE: u32 = 2;

/// Derived amounts shown in the form preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Round an amount to two decimals, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the totals for `quantity` units at `price` each.
///
/// Overflowing inputs produce zero totals rather than an error.
pub fn compute_totals(quantity: i64, price: Decimal) -> InvoiceTotals {
    let Some(subtotal) = Decimal::from(quantity).checked_mul(price) else {
        return InvoiceTotals::default();
    };
    let Some(raw_tax) = subtotal.checked_mul(TAX_RATE) else {
        return InvoiceTotals::default();
    };
    let tax = round_money(raw_tax);
    let Some(total) = subtotal.checked_add(tax) else {
        return InvoiceTotals::default();
    };

    InvoiceTotals {
        subtotal,
        tax,
        total: round_money(total),
    }
}
