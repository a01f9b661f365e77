//! Integration tests for the projection engine
//!
//! Tests are organized by topic:
//! - `mortgage` - Amortization of the reference condo loan
//! - `taxes` - Deduction caps and tax savings
//! - `projection` - Monthly rows, accounting variants and yearly folds
//! - `builder_dsl` - Builder DSL for fluent scenario setup
//! - `properties` - Property-based checks of the amortization and fold invariants

mod builder_dsl;
mod taxes;

use rust_decimal_macros::dec;

use crate::config::{ScenarioBuilder, ScenarioConfig};
use crate::decimal::Money;
use crate::investment::HomeInvestment;
use crate::model::{FederalTaxTable, StateTaxTable, TaxTables};

/// Federal and California tables used throughout the tests
pub(crate) fn tax_tables() -> TaxTables {
    TaxTables {
        federal: FederalTaxTable {
            standard_deduction: Money::from_int(25_100),
            property_tax_limit: Money::from_int(10_000),
        },
        state: StateTaxTable {
            standard_deduction: Money::from_int(9_606),
        },
    }
}

/// $890k condo, 20% down, 4.75% over 30 years, rented out at $4,000
pub(crate) fn condo_builder() -> ScenarioBuilder {
    ScenarioBuilder::new(890_000)
        .down_payment_percent(20)
        .closing_cost_percent(2)
        .mortgage(dec!(4.75), 30)
        .property_tax(dec!(1.25), 2)
        .income_tax(35, dec!(11.3), 500_000)
        .hoi(dec!(0.22), 2)
        .hoa(325, 2)
        .maintenance(dec!(0.25), 2)
        .rent(4_000, 3)
        .sale_closing_cost_percent(8)
        .appreciation_percent(5)
        .index_fund_return_percent(10)
}

pub(crate) fn condo() -> ScenarioConfig {
    condo_builder().build()
}

pub(crate) fn investment(config: &ScenarioConfig) -> HomeInvestment {
    HomeInvestment::new("condo", config, &tax_tables()).unwrap()
}
