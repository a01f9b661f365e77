use super::escalation::{Escalating, MONTHS_PER_YEAR};
use super::purchase::Purchase;
use crate::decimal::{Money, Rate};
use crate::error::ArithmeticError;

/// Appreciation of the home and the cost of eventually selling it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub closing_cost_rate: Rate,
    pub annual_appreciation_rate: Rate,
    appreciated_price: Escalating,
}

impl Sale {
    pub fn new(purchase: &Purchase, closing_cost_rate: Rate, annual_appreciation_rate: Rate) -> Self {
        Self {
            closing_cost_rate,
            annual_appreciation_rate,
            appreciated_price: Escalating::new(purchase.price, annual_appreciation_rate),
        }
    }

    pub fn check_horizon(&self, years: u32) -> Result<(), ArithmeticError> {
        self.appreciated_price.check_horizon(years)
    }

    /// `price * (1 + rate)^year`; year 0 is the purchase price
    pub fn appreciated_price(&self, year: u32) -> Money {
        self.appreciated_price.at_year(year)
    }

    /// Growth recognised during `year` (1-based); year 0 contributes nothing
    pub fn appreciation_per_year(&self, year: u32) -> Money {
        if year == 0 {
            return Money::ZERO;
        }
        self.appreciated_price(year) - self.appreciated_price(year - 1)
    }

    /// The year's appreciation spread flat over its twelve months
    pub fn appreciation_per_month(&self, year: u32) -> Money {
        (self.appreciation_per_year(year) / MONTHS_PER_YEAR).round_cents()
    }

    pub fn closing_cost(&self, appreciated_price: Money) -> Money {
        (appreciated_price * self.closing_cost_rate).round_cents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Percent;
    use crate::model::purchase::DownPayment;
    use rust_decimal_macros::dec;

    fn sale(appreciation_percent: rust_decimal::Decimal) -> Sale {
        let purchase = Purchase::new(
            Money::from_int(500_000),
            DownPayment::PercentOfPrice(Percent::from_int(20)),
            Rate::ZERO,
        )
        .unwrap();
        Sale::new(
            &purchase,
            Rate::from_percent(dec!(8)),
            Rate::from_percent(appreciation_percent),
        )
    }

    #[test]
    fn test_appreciation_compounds_yearly() {
        let sale = sale(dec!(5));
        assert_eq!(sale.appreciated_price(0), Money::from_int(500_000));
        assert_eq!(sale.appreciated_price(1), Money::from_int(525_000));
        assert_eq!(sale.appreciated_price(2), Money::from_int(551_250));
        assert_eq!(sale.appreciation_per_year(0), Money::ZERO);
        assert_eq!(sale.appreciation_per_year(2), Money::from_int(26_250));
        assert_eq!(sale.appreciation_per_month(2), Money::new(dec!(2187.50)));
    }

    #[test]
    fn test_closing_cost_on_current_price() {
        let sale = sale(dec!(0));
        assert_eq!(sale.closing_cost(Money::from_int(600_000)), Money::from_int(48_000));
    }
}
