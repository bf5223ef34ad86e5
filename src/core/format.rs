//! Money formatting in the Colombian convention: thousands grouped with
//! `.`, `,` as the decimal separator, exactly 2 fraction digits.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary value, e.g. `100000` renders as `100.000,00`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();
    let units = abs.trunc();
    // Scale <= 2 after rounding, so the fraction is an exact cent count.
    let cents = ((abs - units) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i128()
        .unwrap_or(0);
    let grouped = units.to_i128().unwrap_or(0).to_formatted_string(&Locale::es_CO);

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{cents:02}")
}
