use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places of the currency's minor unit.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to the currency's minor unit using half-up rounding.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for display, e.g. `$44.98`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round_currency(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_half_up_at_minor_unit() {
        assert_eq!(round_currency(Decimal::new(35984, 4)), Decimal::new(360, 2));
        assert_eq!(round_currency(Decimal::new(1005, 3)), Decimal::new(101, 2));
        assert_eq!(round_currency(Decimal::new(1004, 3)), Decimal::new(100, 2));
    }

    #[test]
    fn should_leave_exact_amounts_untouched() {
        assert_eq!(round_currency(Decimal::new(4498, 2)), Decimal::new(4498, 2));
    }

    #[test]
    fn should_format_with_two_decimals() {
        assert_eq!(format_currency(Decimal::new(36, 1)), "$3.60");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }
}
