//! Scenario Builder
//!
//! Fluent construction of [`ScenarioConfig`] values in code. Everything not set
//! explicitly is zero, except the down payment, which must be set exactly once
//! for the scenario to build into a [`HomeInvestment`](crate::HomeInvestment).

use rust_decimal::Decimal;

use super::{
    Accounting, IncomeConfig, MortgageConfig, OperatingExpensesConfig, PurchaseConfig,
    SaleConfig, ScenarioConfig, TaxesConfig,
};
use crate::decimal::Money;

/// Builder for [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    /// Start a scenario for a home bought at `price`
    #[must_use]
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self {
            config: ScenarioConfig {
                purchase: PurchaseConfig {
                    price: Money::new(price.into()),
                    down_payment: None,
                    down_payment_percent: None,
                    closing_cost_percent: Decimal::ZERO,
                },
                mortgage: MortgageConfig {
                    interest_rate_percent: Decimal::ZERO,
                    loan_term_years: Decimal::from(30),
                },
                taxes: TaxesConfig {
                    property_tax_percent: Decimal::ZERO,
                    property_tax_annual_increase_percent: Decimal::ZERO,
                    federal_tax_rate_percent: Decimal::ZERO,
                    state_tax_rate_percent: Decimal::ZERO,
                    yearly_income: Money::ZERO,
                },
                operating_expenses: OperatingExpensesConfig::default(),
                income: IncomeConfig::default(),
                sale: SaleConfig::default(),
                index_fund_annual_return_percent: Decimal::ZERO,
                accounting: Accounting::default(),
            },
        }
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    #[must_use]
    pub fn down_payment(mut self, amount: impl Into<Decimal>) -> Self {
        self.config.purchase.down_payment = Some(Money::new(amount.into()));
        self
    }

    #[must_use]
    pub fn down_payment_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.purchase.down_payment_percent = Some(percent.into());
        self
    }

    #[must_use]
    pub fn closing_cost_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.purchase.closing_cost_percent = percent.into();
        self
    }

    // =========================================================================
    // Mortgage and taxes
    // =========================================================================

    /// Set the interest rate (percent) and loan term (years)
    #[must_use]
    pub fn mortgage(
        mut self,
        interest_rate_percent: impl Into<Decimal>,
        loan_term_years: impl Into<Decimal>,
    ) -> Self {
        self.config.mortgage = MortgageConfig {
            interest_rate_percent: interest_rate_percent.into(),
            loan_term_years: loan_term_years.into(),
        };
        self
    }

    #[must_use]
    pub fn property_tax(
        mut self,
        percent: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.taxes.property_tax_percent = percent.into();
        self.config.taxes.property_tax_annual_increase_percent = annual_increase_percent.into();
        self
    }

    /// Marginal federal and state rates plus the gross income they apply to
    #[must_use]
    pub fn income_tax(
        mut self,
        federal_percent: impl Into<Decimal>,
        state_percent: impl Into<Decimal>,
        yearly_income: impl Into<Decimal>,
    ) -> Self {
        self.config.taxes.federal_tax_rate_percent = federal_percent.into();
        self.config.taxes.state_tax_rate_percent = state_percent.into();
        self.config.taxes.yearly_income = Money::new(yearly_income.into());
        self
    }

    // =========================================================================
    // Operating expenses
    // =========================================================================

    #[must_use]
    pub fn hoi(
        mut self,
        percent: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.operating_expenses.hoi_percent = percent.into();
        self.config.operating_expenses.hoi_annual_increase_percent =
            annual_increase_percent.into();
        self
    }

    /// Monthly HOA dues
    #[must_use]
    pub fn hoa(
        mut self,
        monthly: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.operating_expenses.hoa = Money::new(monthly.into());
        self.config.operating_expenses.hoa_annual_increase_percent =
            annual_increase_percent.into();
        self
    }

    #[must_use]
    pub fn maintenance(
        mut self,
        percent: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.operating_expenses.maintenance_percent = percent.into();
        self.config.operating_expenses.maintenance_annual_increase_percent =
            annual_increase_percent.into();
        self
    }

    #[must_use]
    pub fn other_costs(
        mut self,
        percent: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.operating_expenses.other_percent = percent.into();
        self.config.operating_expenses.other_annual_increase_percent =
            annual_increase_percent.into();
        self
    }

    // =========================================================================
    // Income
    // =========================================================================

    #[must_use]
    pub fn rent(
        mut self,
        monthly: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.income.rent = Money::new(monthly.into());
        self.config.income.rent_annual_increase_percent = annual_increase_percent.into();
        self
    }

    #[must_use]
    pub fn tenant_rent(
        mut self,
        monthly: impl Into<Decimal>,
        annual_increase_percent: impl Into<Decimal>,
    ) -> Self {
        self.config.income.tenant_rent = Money::new(monthly.into());
        self.config.income.tenant_rent_annual_increase_percent = annual_increase_percent.into();
        self
    }

    #[must_use]
    pub fn vacancy_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.income.vacancy_percent = percent.into();
        self
    }

    #[must_use]
    pub fn management_fee_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.income.management_fee_percent = percent.into();
        self
    }

    // =========================================================================
    // Sale and comparison
    // =========================================================================

    #[must_use]
    pub fn sale_closing_cost_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.sale.closing_cost_percent = percent.into();
        self
    }

    #[must_use]
    pub fn appreciation_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.sale.annual_appreciation_percent = percent.into();
        self
    }

    #[must_use]
    pub fn index_fund_return_percent(mut self, percent: impl Into<Decimal>) -> Self {
        self.config.index_fund_annual_return_percent = percent.into();
        self
    }

    #[must_use]
    pub fn accounting(mut self, accounting: Accounting) -> Self {
        self.config.accounting = accounting;
        self
    }

    #[must_use]
    pub fn build(self) -> ScenarioConfig {
        self.config
    }
}
