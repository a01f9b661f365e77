//! Scenario configuration
//!
//! [`ScenarioConfig`] holds the raw, already-parsed inputs of one purchase
//! scenario, grouped by sub-model. Percentages are written as percentages
//! (`4.75` for 4.75%) and converted to [`Rate`](crate::decimal::Rate)s when the
//! models are built. Optional numeric fields default to zero.
//!
//! # Builder DSL
//!
//! ```ignore
//! use homeroi_core::config::ScenarioBuilder;
//! use rust_decimal_macros::dec;
//!
//! let config = ScenarioBuilder::new(890_000)
//!     .down_payment_percent(20)
//!     .closing_cost_percent(2)
//!     .mortgage(dec!(4.75), 30)
//!     .property_tax(dec!(1.25), 2)
//!     .income_tax(35, dec!(11.3), 500_000)
//!     .rent(4_000, 3)
//!     .appreciation_percent(5)
//!     .build();
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

pub mod builder;

pub use builder::ScenarioBuilder;

/// How the home-investment value accounts for monthly cash flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accounting {
    /// Out-of-pocket months feed the comparison index fund, surplus months
    /// feed a separate surplus fund credited to the home
    #[default]
    DualFund,
    /// Every month must cost money; a positive month is a modeling error
    NegativeCarry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub purchase: PurchaseConfig,
    pub mortgage: MortgageConfig,
    pub taxes: TaxesConfig,
    #[serde(default)]
    pub operating_expenses: OperatingExpensesConfig,
    #[serde(default)]
    pub income: IncomeConfig,
    #[serde(default)]
    pub sale: SaleConfig,
    #[serde(default)]
    pub index_fund_annual_return_percent: Decimal,
    #[serde(default)]
    pub accounting: Accounting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchaseConfig {
    pub price: Money,
    /// Mutually exclusive with `down_payment_percent`
    #[serde(default)]
    pub down_payment: Option<Money>,
    #[serde(default)]
    pub down_payment_percent: Option<Decimal>,
    #[serde(default)]
    pub closing_cost_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MortgageConfig {
    pub interest_rate_percent: Decimal,
    /// Must be a whole number
    pub loan_term_years: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxesConfig {
    #[serde(default)]
    pub property_tax_percent: Decimal,
    #[serde(default)]
    pub property_tax_annual_increase_percent: Decimal,
    pub federal_tax_rate_percent: Decimal,
    pub state_tax_rate_percent: Decimal,
    pub yearly_income: Money,
}

/// Insurance, maintenance and other costs are yearly percentages of the price;
/// HOA is a monthly amount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OperatingExpensesConfig {
    pub hoi_percent: Decimal,
    pub hoi_annual_increase_percent: Decimal,
    pub hoa: Money,
    pub hoa_annual_increase_percent: Decimal,
    pub maintenance_percent: Decimal,
    pub maintenance_annual_increase_percent: Decimal,
    pub other_percent: Decimal,
    pub other_annual_increase_percent: Decimal,
}

/// Monthly rent figures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncomeConfig {
    pub rent: Money,
    pub rent_annual_increase_percent: Decimal,
    pub tenant_rent: Money,
    pub tenant_rent_annual_increase_percent: Decimal,
    pub vacancy_percent: Decimal,
    pub management_fee_percent: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaleConfig {
    pub closing_cost_percent: Decimal,
    pub annual_appreciation_percent: Decimal,
}
