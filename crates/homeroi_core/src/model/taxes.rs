//! Mortgage-interest and property-tax deduction model
//!
//! Per year: `deduction = min(min(property_tax, cap) + deductible_interest, income)`.
//! Savings only count the excess of itemizing over the standard deduction:
//! `max(rate * deduction - rate * standard_deduction, 0)`, computed separately
//! for federal and state rates.

use super::escalation::{Escalating, MONTHS_PER_YEAR};
use super::mortgage::Mortgage;
use super::purchase::Purchase;
use super::tax_table::TaxTables;
use crate::decimal::{Money, Rate};
use crate::error::ArithmeticError;

/// Tax savings attributable to one year of ownership
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxSavings {
    pub federal: Money,
    pub state: Money,
}

impl TaxSavings {
    pub fn total(&self) -> Money {
        self.federal + self.state
    }

    /// Flat monthly share of the yearly total
    pub fn per_month(&self) -> Money {
        (self.total() / MONTHS_PER_YEAR).round_cents()
    }
}

/// Benefit of itemizing `deduction` over taking `standard_deduction`, at `rate`
pub fn tax_savings(rate: Rate, deduction: Money, standard_deduction: Money) -> Money {
    let itemized = (deduction * rate).round_cents();
    let standard = (standard_deduction * rate).round_cents();
    (itemized - standard).max(Money::ZERO)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxes {
    pub property_tax_rate: Rate,
    pub property_tax_annual_increase_rate: Rate,
    /// Monthly property tax, escalating yearly
    pub property_tax: Escalating,
    pub federal_tax_rate: Rate,
    pub state_tax_rate: Rate,
    pub yearly_income: Money,
    pub federal_standard_deduction: Money,
    pub state_standard_deduction: Money,
    pub property_tax_limit: Money,
    /// Index 0 is the purchase year and is always zero
    tax_deduction_per_year: Vec<Money>,
}

#[derive(Debug, Clone, Copy)]
pub struct TaxParams {
    pub property_tax_rate: Rate,
    pub property_tax_annual_increase_rate: Rate,
    pub federal_tax_rate: Rate,
    pub state_tax_rate: Rate,
    pub yearly_income: Money,
}

impl Taxes {
    pub fn new(
        mortgage: &Mortgage,
        purchase: &Purchase,
        params: TaxParams,
        tables: &TaxTables,
    ) -> Result<Self, ArithmeticError> {
        let property_tax = Escalating::new(
            purchase.price * params.property_tax_rate / MONTHS_PER_YEAR,
            params.property_tax_annual_increase_rate,
        );
        property_tax.check_horizon(mortgage.loan_term_years)?;

        let mut taxes = Self {
            property_tax_rate: params.property_tax_rate,
            property_tax_annual_increase_rate: params.property_tax_annual_increase_rate,
            property_tax,
            federal_tax_rate: params.federal_tax_rate,
            state_tax_rate: params.state_tax_rate,
            yearly_income: params.yearly_income,
            federal_standard_deduction: tables.federal.standard_deduction,
            state_standard_deduction: tables.state.standard_deduction,
            property_tax_limit: tables.federal.property_tax_limit,
            tax_deduction_per_year: Vec::new(),
        };
        taxes.tax_deduction_per_year = taxes.calculate_tax_deduction_per_year(mortgage);
        Ok(taxes)
    }

    /// One entry per loan year, plus the zero entry for year 0. Years after an
    /// early payoff still deduct property tax.
    fn calculate_tax_deduction_per_year(&self, mortgage: &Mortgage) -> Vec<Money> {
        let mut deductible_interest = vec![Money::ZERO; mortgage.loan_term_years as usize];
        for year in mortgage.yearly_mortgage_schedule() {
            if let Some(slot) = deductible_interest.get_mut(year.year as usize - 1) {
                *slot = year.deductible_interest;
            }
        }

        std::iter::once(Money::ZERO)
            .chain(
                deductible_interest
                    .into_iter()
                    .zip(0u32..)
                    .map(|(interest, year_index)| self.deduction(year_index, interest)),
            )
            .collect()
    }

    fn deduction(&self, year_index: u32, deductible_interest: Money) -> Money {
        let property_tax = self
            .property_tax
            .full_year(year_index)
            .min(self.property_tax_limit);
        (property_tax + deductible_interest).min(self.yearly_income)
    }

    pub fn tax_deduction_per_year(&self) -> &[Money] {
        &self.tax_deduction_per_year
    }

    /// Savings for each year; index 0 (purchase) is zero
    pub fn tax_savings_per_year(&self) -> Vec<TaxSavings> {
        self.tax_deduction_per_year
            .iter()
            .enumerate()
            .map(|(year, deduction)| {
                if year == 0 {
                    return TaxSavings::default();
                }
                TaxSavings {
                    federal: tax_savings(
                        self.federal_tax_rate,
                        *deduction,
                        self.federal_standard_deduction,
                    ),
                    state: tax_savings(
                        self.state_tax_rate,
                        *deduction,
                        self.state_standard_deduction,
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_savings_only_count_excess_over_standard() {
        let rate = Rate::from_percent(dec!(35));
        assert_eq!(
            tax_savings(rate, Money::from_int(40_000), Money::from_int(25_000)),
            Money::from_int(5_250)
        );
        assert_eq!(
            tax_savings(rate, Money::from_int(20_000), Money::from_int(25_000)),
            Money::ZERO
        );
    }

    #[test]
    fn test_monthly_share_is_flat() {
        let savings = TaxSavings {
            federal: Money::from_int(1_000),
            state: Money::from_int(200),
        };
        assert_eq!(savings.per_month(), Money::from_int(100));
    }
}
