//! Common utility functions for carbon calculations.
//!
//! Stored values are never rounded; rounding is a presentation concern and
//! is applied only where figures are displayed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero, so `1.605` at
/// two places becomes `1.61`, and `-0.5` at zero places becomes `-1`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use carbon_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1.605625), 2), dec!(1.61));
/// assert_eq!(round_half_up(dec!(12.34), 1), dec!(12.3));
/// assert_eq!(round_half_up(dec!(437.5), 0), dec!(438));
/// assert_eq!(round_half_up(dec!(-2.5), 0), dec!(-3)); // Away from zero
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
