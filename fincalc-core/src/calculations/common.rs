//! Shared helpers for the calculation library: financial rounding and
//! percent-to-fraction conversion.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoints go away from zero), the standard convention for
/// currency amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fincalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Converts a user-facing percentage (e.g. 7.5 for 7.5%) to a fraction.
pub fn pct(rate: Decimal) -> Decimal {
    rate / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(19.994)), dec!(19.99));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(19.995)), dec!(20.00));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-19.995)), dec!(-20.00));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(42.10)), dec!(42.10));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(1.00), dec!(2.00)), dec!(2.00));
        assert_eq!(max(dec!(2.00), dec!(1.00)), dec!(2.00));
        assert_eq!(max(dec!(-1.00), dec!(-2.00)), dec!(-1.00));
    }

    #[test]
    fn pct_converts_percent_to_fraction() {
        assert_eq!(pct(dec!(7.5)), dec!(0.075));
        assert_eq!(pct(dec!(100)), dec!(1));
        assert_eq!(pct(Decimal::ZERO), Decimal::ZERO);
    }
}
