//! Scenario assembly
//!
//! [`HomeInvestment`] builds every sub-model once, in dependency order
//! (purchase, mortgage, taxes, income, operating expenses, sale), and is
//! immutable afterwards. Projections borrow it.

use rust_decimal::Decimal;

use crate::config::{Accounting, ScenarioConfig};
use crate::decimal::{Money, Percent, Rate};
use crate::error::{ConfigError, Result};
use crate::model::{
    DownPayment, Escalating, Income, IncomeParams, MONTHS_PER_YEAR, Mortgage,
    OperatingExpenseParams, OperatingExpenses, Purchase, Sale, TaxParams, TaxTables, Taxes,
};
use crate::projection::InvestmentBreakdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeInvestment {
    pub scenario_name: String,
    pub purchase: Purchase,
    pub mortgage: Mortgage,
    pub taxes: Taxes,
    pub income: Income,
    pub operating_expenses: OperatingExpenses,
    pub sale: Sale,
    pub index_fund_annual_return_rate: Rate,
    pub accounting: Accounting,
    index_fund_monthly_growth: Rate,
}

fn non_negative(value: Decimal, field: &'static str) -> std::result::Result<Decimal, ConfigError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::Negative { field });
    }
    Ok(value)
}

fn rate(percent: Decimal, field: &'static str) -> std::result::Result<Rate, ConfigError> {
    non_negative(percent, field).map(Rate::from_percent)
}

fn amount(value: Money, field: &'static str) -> std::result::Result<Money, ConfigError> {
    non_negative(value.value(), field).map(Money::new)
}

impl HomeInvestment {
    pub fn new(
        scenario_name: impl Into<String>,
        config: &ScenarioConfig,
        tax_tables: &TaxTables,
    ) -> Result<Self> {
        let down_payment = DownPayment::from_inputs(
            config.purchase.down_payment,
            config.purchase.down_payment_percent.map(Percent::new),
        )?;
        let purchase = Purchase::new(
            config.purchase.price,
            down_payment,
            rate(
                config.purchase.closing_cost_percent,
                "purchase.closing_cost_percent",
            )?,
        )?;

        let mortgage = Mortgage::new(
            &purchase,
            rate(
                config.mortgage.interest_rate_percent,
                "mortgage.interest_rate_percent",
            )?,
            config.mortgage.loan_term_years,
        )?;

        let taxes_config = &config.taxes;
        let taxes = Taxes::new(
            &mortgage,
            &purchase,
            TaxParams {
                property_tax_rate: rate(
                    taxes_config.property_tax_percent,
                    "taxes.property_tax_percent",
                )?,
                property_tax_annual_increase_rate: Rate::from_percent(
                    taxes_config.property_tax_annual_increase_percent,
                ),
                federal_tax_rate: rate(
                    taxes_config.federal_tax_rate_percent,
                    "taxes.federal_tax_rate_percent",
                )?,
                state_tax_rate: rate(
                    taxes_config.state_tax_rate_percent,
                    "taxes.state_tax_rate_percent",
                )?,
                yearly_income: amount(taxes_config.yearly_income, "taxes.yearly_income")?,
            },
            tax_tables,
        )?;

        let income_config = &config.income;
        let income = Income::new(
            &taxes,
            IncomeParams {
                rent: Escalating::new(
                    amount(income_config.rent, "income.rent")?,
                    Rate::from_percent(income_config.rent_annual_increase_percent),
                ),
                tenant_rent: Escalating::new(
                    amount(income_config.tenant_rent, "income.tenant_rent")?,
                    Rate::from_percent(income_config.tenant_rent_annual_increase_percent),
                ),
                vacancy_rate: rate(income_config.vacancy_percent, "income.vacancy_percent")?,
                management_fee_rate: rate(
                    income_config.management_fee_percent,
                    "income.management_fee_percent",
                )?,
            },
        );

        let expenses = &config.operating_expenses;
        let operating_expenses = OperatingExpenses::new(
            &purchase,
            &income,
            &taxes,
            OperatingExpenseParams {
                hoi_rate: rate(expenses.hoi_percent, "operating_expenses.hoi_percent")?,
                hoi_annual_increase_rate: Rate::from_percent(expenses.hoi_annual_increase_percent),
                hoa: amount(expenses.hoa, "operating_expenses.hoa")?,
                hoa_annual_increase_rate: Rate::from_percent(expenses.hoa_annual_increase_percent),
                maintenance_rate: rate(
                    expenses.maintenance_percent,
                    "operating_expenses.maintenance_percent",
                )?,
                maintenance_annual_increase_rate: Rate::from_percent(
                    expenses.maintenance_annual_increase_percent,
                ),
                other_rate: rate(expenses.other_percent, "operating_expenses.other_percent")?,
                other_annual_increase_rate: Rate::from_percent(
                    expenses.other_annual_increase_percent,
                ),
            },
        );

        let sale = Sale::new(
            &purchase,
            rate(config.sale.closing_cost_percent, "sale.closing_cost_percent")?,
            Rate::from_percent(config.sale.annual_appreciation_percent),
        );

        let horizon = mortgage.loan_term_years;
        for stream in [
            income.rent,
            income.tenant_rent,
            operating_expenses.hoi,
            operating_expenses.hoa,
            operating_expenses.maintenance,
            operating_expenses.other,
        ] {
            stream.check_horizon(horizon)?;
        }
        sale.check_horizon(horizon)?;

        let index_fund_annual_return_rate = rate(
            config.index_fund_annual_return_percent,
            "index_fund_annual_return_percent",
        )?;

        Ok(Self {
            scenario_name: scenario_name.into(),
            purchase,
            mortgage,
            taxes,
            income,
            operating_expenses,
            sale,
            index_fund_annual_return_rate,
            accounting: config.accounting,
            index_fund_monthly_growth: monthly_growth(index_fund_annual_return_rate),
        })
    }

    /// Factor applied to both index-fund balances each month: `(1 + r)^(1/12)`
    pub fn index_fund_monthly_growth(&self) -> Rate {
        self.index_fund_monthly_growth
    }

    pub fn breakdown(&self) -> InvestmentBreakdown<'_> {
        InvestmentBreakdown::new(self)
    }
}

fn monthly_growth(annual: Rate) -> Rate {
    if annual.is_zero() {
        return Rate::ONE;
    }
    (Rate::ONE + annual).powd(Decimal::ONE / Decimal::from(MONTHS_PER_YEAR))
}
