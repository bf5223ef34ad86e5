//! Conversion arithmetic with currency-safe rounding.

use anyhow::{Result, anyhow};
use rust_decimal::{Decimal, RoundingStrategy};

/// Result of applying a pair rate to an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub amount: Decimal,
    pub rate: Decimal,
    pub converted: Decimal,
}

impl Conversion {
    /// Applies `rate` to `amount`. The rate arrives as `f64` from the
    /// remote API and is widened into `Decimal` before any arithmetic so
    /// the rounding boundary is never subject to binary float error.
    pub fn compute(amount: Decimal, rate: f64) -> Result<Self> {
        let rate = Decimal::from_f64_retain(rate)
            .ok_or_else(|| anyhow!("tasa fuera de rango: {rate}"))?;
        Ok(Conversion {
            amount,
            rate,
            converted: convert(amount, rate)?,
        })
    }
}

/// `amount × rate`, rounded to exactly 2 fractional digits with ties
/// rounding away from zero.
pub fn convert(amount: Decimal, rate: Decimal) -> Result<Decimal> {
    let product = amount
        .checked_mul(rate)
        .ok_or_else(|| anyhow!("monto fuera de rango: {amount} x {rate}"))?;
    Ok(product.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
