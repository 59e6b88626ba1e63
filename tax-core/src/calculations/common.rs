//! Common utility functions for tax calculations.
//!
//! Rounding lives here so that band amounts, totals and rates all round
//! the same way.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(17739.165)), dec!(17739.17));
/// assert_eq!(round_half_up(dec!(10209.615)), dec!(10209.62));
/// assert_eq!(round_half_up(dec!(7529.55)), dec!(7529.55));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(31.2328));

        assert_eq!(result, dec!(31.23));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(385587.645));

        assert_eq!(result, dec!(385587.65));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        let result = round_half_up(dec!(5084.7175));

        assert_eq!(result, dec!(5084.72));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-0.005));

        assert_eq!(result, dec!(-0.01)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(17.74));

        assert_eq!(result, dec!(17.74));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_small_values() {
        let result = round_half_up(dec!(0.0015));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_keeps_exact_cents() {
        let result = round_half_up(dec!(334243.47));

        assert_eq!(result, dec!(334243.47));
    }
}
