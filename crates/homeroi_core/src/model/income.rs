use super::escalation::{Escalating, year_index};
use super::taxes::{TaxSavings, Taxes};
use crate::decimal::{Money, Rate};

/// Monthly income streams of the property, plus tax savings converted to cash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Income {
    /// Rent the owner collects (or saves by not renting elsewhere)
    pub rent: Escalating,
    /// Rent paid by a tenant sharing the property
    pub tenant_rent: Escalating,
    pub vacancy_rate: Rate,
    pub management_fee_rate: Rate,
    tax_savings_per_year: Vec<TaxSavings>,
}

#[derive(Debug, Clone, Copy)]
pub struct IncomeParams {
    pub rent: Escalating,
    pub tenant_rent: Escalating,
    pub vacancy_rate: Rate,
    pub management_fee_rate: Rate,
}

impl Income {
    pub fn new(taxes: &Taxes, params: IncomeParams) -> Self {
        Self {
            rent: params.rent,
            tenant_rent: params.tenant_rent,
            vacancy_rate: params.vacancy_rate,
            management_fee_rate: params.management_fee_rate,
            tax_savings_per_year: taxes.tax_savings_per_year(),
        }
    }

    /// Indexed by year; entry 0 is the purchase year
    pub fn tax_savings_per_year(&self) -> &[TaxSavings] {
        &self.tax_savings_per_year
    }

    /// The year's savings spread flat over its twelve months; zero at month 0
    pub fn tax_savings(&self, month: u32) -> Money {
        if month == 0 {
            return Money::ZERO;
        }
        self.tax_savings_per_year
            .get(year_index(month) as usize + 1)
            .map(TaxSavings::per_month)
            .unwrap_or(Money::ZERO)
    }
}
