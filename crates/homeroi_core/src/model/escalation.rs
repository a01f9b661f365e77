use crate::decimal::{Money, Rate};
use crate::error::ArithmeticError;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Zero-based year index of a 1-based month (`month 1..=12 -> 0`).
/// Month 0 is the purchase event and maps to year 0 as well.
pub fn year_index(month: u32) -> u32 {
    month.saturating_sub(1) / MONTHS_PER_YEAR
}

/// One-based calendar year a 1-based month falls in; month 0 is year 0
pub fn row_year(month: u32) -> u32 {
    if month == 0 {
        0
    } else {
        year_index(month) + 1
    }
}

/// A recurring amount that compounds once per full year elapsed.
///
/// The value for month `m >= 1` is `initial * (1 + rate)^floor((m - 1) / 12)`,
/// rounded half-up to cents. Month 0 (closing) always yields zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalating {
    pub initial: Money,
    pub rate: Rate,
}

impl Escalating {
    pub fn new(initial: Money, rate: Rate) -> Self {
        Self { initial, rate }
    }

    pub fn fixed(initial: Money) -> Self {
        Self::new(initial, Rate::ZERO)
    }

    pub fn at_month(&self, month: u32) -> Money {
        if month == 0 {
            return Money::ZERO;
        }
        self.at_year(year_index(month))
    }

    /// Fails when `years` of compounding (or a full year's total at that
    /// point) does not fit. Once this passes, every accessor up to `years`
    /// is safe.
    pub fn check_horizon(&self, years: u32) -> Result<(), ArithmeticError> {
        let growth = (Rate::ONE + self.rate).checked_powu(u64::from(years), "escalation")?;
        self.initial
            .checked_mul(growth, "escalation")?
            .checked_mul(Rate::from_int(i64::from(MONTHS_PER_YEAR)), "escalation")?;
        Ok(())
    }

    /// Value after `years` full years of compounding
    pub fn at_year(&self, years: u32) -> Money {
        (self.initial * (Rate::ONE + self.rate).powu(u64::from(years))).round_cents()
    }

    /// Twelve months at the rate applicable `years` years in
    pub fn full_year(&self, years: u32) -> Money {
        self.at_year(years) * MONTHS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_horizon() {
        let rent = Escalating::new(Money::from_int(4_000), Rate::from_percent(dec!(3)));
        assert_eq!(rent.check_horizon(30), Ok(()));

        let runaway = Escalating::new(Money::from_int(4_000), Rate::from_percent(dec!(1000)));
        assert_eq!(
            runaway.check_horizon(30),
            Err(ArithmeticError::Overflow {
                context: "escalation"
            })
        );
    }

    #[test]
    fn test_month_zero_is_always_zero() {
        let rent = Escalating::new(Money::from_int(4_000), Rate::from_percent(dec!(3)));
        assert_eq!(rent.at_month(0), Money::ZERO);
    }

    #[test]
    fn test_steps_once_per_full_year() {
        let rent = Escalating::new(Money::from_int(4_000), Rate::from_percent(dec!(3)));
        assert_eq!(rent.at_month(1), Money::from_int(4_000));
        assert_eq!(rent.at_month(12), Money::from_int(4_000));
        assert_eq!(rent.at_month(13), Money::from_int(4_120));
        assert_eq!(rent.at_month(24), Money::from_int(4_120));
        assert_eq!(rent.at_month(25), Money::new(dec!(4243.60)));
    }

    #[test]
    fn test_values_round_half_up_to_cents() {
        // 1.25% of 890k per month = 927.083333...
        let property_tax = Escalating::fixed(Money::new(dec!(11125) / dec!(12)));
        assert_eq!(property_tax.at_month(1), Money::new(dec!(927.08)));
        assert_eq!(property_tax.full_year(0), Money::new(dec!(11124.96)));
    }

    #[test]
    fn test_year_mapping() {
        assert_eq!(row_year(0), 0);
        assert_eq!(row_year(1), 1);
        assert_eq!(row_year(12), 1);
        assert_eq!(row_year(13), 2);
        assert_eq!(year_index(360), 29);
    }
}
