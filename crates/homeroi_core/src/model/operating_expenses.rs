use super::escalation::{Escalating, MONTHS_PER_YEAR};
use super::income::Income;
use super::purchase::Purchase;
use super::taxes::Taxes;
use crate::decimal::{Money, Rate};

/// Recurring costs of owning the property.
///
/// Insurance, maintenance and "other" are quoted as a yearly share of the
/// purchase price; HOA is a flat monthly amount. Vacancy and management fee
/// follow the current month's rent figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingExpenses {
    pub property_tax_rate: Rate,
    pub property_tax: Escalating,

    pub hoi_rate: Rate,
    pub hoi: Escalating,
    pub hoa: Escalating,
    pub maintenance_rate: Rate,
    pub maintenance: Escalating,
    pub other_rate: Rate,
    pub other: Escalating,

    vacancy_rate: Rate,
    management_fee_rate: Rate,
    rent: Escalating,
    tenant_rent: Escalating,
}

#[derive(Debug, Clone, Copy)]
pub struct OperatingExpenseParams {
    pub hoi_rate: Rate,
    pub hoi_annual_increase_rate: Rate,
    pub hoa: Money,
    pub hoa_annual_increase_rate: Rate,
    pub maintenance_rate: Rate,
    pub maintenance_annual_increase_rate: Rate,
    pub other_rate: Rate,
    pub other_annual_increase_rate: Rate,
}

impl OperatingExpenses {
    pub fn new(
        purchase: &Purchase,
        income: &Income,
        taxes: &Taxes,
        params: OperatingExpenseParams,
    ) -> Self {
        let monthly_share = |rate: Rate| purchase.price * rate / MONTHS_PER_YEAR;

        Self {
            property_tax_rate: taxes.property_tax_rate,
            property_tax: taxes.property_tax,
            hoi_rate: params.hoi_rate,
            hoi: Escalating::new(monthly_share(params.hoi_rate), params.hoi_annual_increase_rate),
            hoa: Escalating::new(params.hoa, params.hoa_annual_increase_rate),
            maintenance_rate: params.maintenance_rate,
            maintenance: Escalating::new(
                monthly_share(params.maintenance_rate),
                params.maintenance_annual_increase_rate,
            ),
            other_rate: params.other_rate,
            other: Escalating::new(
                monthly_share(params.other_rate),
                params.other_annual_increase_rate,
            ),
            vacancy_rate: income.vacancy_rate,
            management_fee_rate: income.management_fee_rate,
            rent: income.rent,
            tenant_rent: income.tenant_rent,
        }
    }

    /// Lost tenant rent for `month`
    pub fn vacancy(&self, month: u32) -> Money {
        (self.tenant_rent.at_month(month) * self.vacancy_rate).round_cents()
    }

    pub fn management_fee(&self, month: u32) -> Money {
        (self.rent.at_month(month) * self.management_fee_rate).round_cents()
    }
}
