use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to the cent, midpoint away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum already-exact amounts and round the total once.
pub fn sum_cents<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_cents(amounts.into_iter().sum())
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{round_cents, sum_cents};

    #[test]
    fn rounds_half_cent_away_from_zero() {
        assert_eq!(round_cents(dec!(2.005)), dec!(2.01));
        assert_eq!(round_cents(dec!(-2.005)), dec!(-2.01));
    }

    #[test]
    fn leaves_exact_cents_untouched() {
        assert_eq!(round_cents(dec!(1800.00)), dec!(1800.00));
    }

    #[test]
    fn sums_without_compounding_drift() {
        let total = sum_cents([dec!(0.10), dec!(0.20), dec!(0.30)]);
        assert_eq!(total, dec!(0.60));
    }
}
