//! Shared helpers for currency arithmetic.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoints go away from zero), the standard convention for
/// currency display.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(155.325)), dec!(155.33));
/// assert_eq!(round_half_up(dec!(155.324)), dec!(155.32));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Restricts `value` to the `[floor, ceiling]` range.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(500), dec!(1412.00), dec!(7786.02)), dec!(1412.00));
/// assert_eq!(clamp(dec!(3000), dec!(1412.00), dec!(7786.02)), dec!(3000));
/// assert_eq!(clamp(dec!(10000), dec!(1412.00), dec!(7786.02)), dec!(7786.02));
/// ```
pub fn clamp(
    value: Decimal,
    floor: Decimal,
    ceiling: Decimal,
) -> Decimal {
    value.max(floor).min(ceiling)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(68.554));

        assert_eq!(result, dec!(68.55));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(68.555));

        assert_eq!(result, dec!(68.56));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-68.555));

        assert_eq!(result, dec!(-68.56)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(68.56));

        assert_eq!(result, dec!(68.56));
    }

    // =========================================================================
    // clamp tests
    // =========================================================================

    #[test]
    fn clamp_raises_values_below_the_floor() {
        let result = clamp(dec!(500.00), dec!(1412.00), dec!(7786.02));

        assert_eq!(result, dec!(1412.00));
    }

    #[test]
    fn clamp_lowers_values_above_the_ceiling() {
        let result = clamp(dec!(10000.00), dec!(1412.00), dec!(7786.02));

        assert_eq!(result, dec!(7786.02));
    }

    #[test]
    fn clamp_keeps_values_inside_the_range() {
        let result = clamp(dec!(3000.00), dec!(1412.00), dec!(7786.02));

        assert_eq!(result, dec!(3000.00));
    }

    #[test]
    fn clamp_keeps_boundary_values() {
        assert_eq!(
            clamp(dec!(1412.00), dec!(1412.00), dec!(7786.02)),
            dec!(1412.00)
        );
        assert_eq!(
            clamp(dec!(7786.02), dec!(1412.00), dec!(7786.02)),
            dec!(7786.02)
        );
    }
}
