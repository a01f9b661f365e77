//! Tests for the Builder DSL
//!
//! These tests verify the fluent builder API for creating scenarios.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{condo, condo_builder, tax_tables};
use crate::config::{Accounting, ScenarioBuilder};
use crate::decimal::{Money, Rate};
use crate::error::{ConfigError, ProjectionError};
use crate::investment::HomeInvestment;

/// Test basic ScenarioBuilder usage
#[test]
fn test_scenario_builder_basic() {
    let config = ScenarioBuilder::new(500_000)
        .down_payment_percent(25)
        .mortgage(dec!(6.5), 15)
        .build();

    assert_eq!(config.purchase.price, Money::from_int(500_000));
    assert_eq!(config.purchase.down_payment_percent, Some(Decimal::from(25)));
    assert_eq!(config.purchase.down_payment, None);
    assert_eq!(config.mortgage.interest_rate_percent, dec!(6.5));
    assert_eq!(config.mortgage.loan_term_years, Decimal::from(15));

    // Everything else defaults to zero
    assert_eq!(config.income.rent, Money::ZERO);
    assert_eq!(config.operating_expenses.hoa, Money::ZERO);
    assert_eq!(config.index_fund_annual_return_percent, Decimal::ZERO);
    assert_eq!(config.accounting, Accounting::DualFund);
}

/// Test that builder inputs reach the models as rates
#[test]
fn test_builder_feeds_models() {
    let investment = HomeInvestment::new("condo", &condo(), &tax_tables()).unwrap();

    assert_eq!(investment.scenario_name, "condo");
    assert_eq!(investment.mortgage.interest_rate, Rate::from_percent(dec!(4.75)));
    assert_eq!(investment.taxes.state_tax_rate, Rate::from_percent(dec!(11.3)));
    assert_eq!(investment.income.rent.initial, Money::from_int(4_000));
    assert_eq!(investment.income.rent.rate, Rate::from_percent(dec!(3)));
    assert_eq!(investment.operating_expenses.hoa.initial, Money::from_int(325));
    assert_eq!(investment.sale.closing_cost_rate, Rate::from_percent(dec!(8)));
    assert_eq!(
        investment.index_fund_annual_return_rate,
        Rate::from_percent(dec!(10))
    );
}

/// Test absolute down payment
#[test]
fn test_builder_absolute_down_payment() {
    let config = ScenarioBuilder::new(400_000)
        .down_payment(100_000)
        .mortgage(5, 30)
        .build();
    let investment = HomeInvestment::new("house", &config, &tax_tables()).unwrap();

    assert_eq!(investment.purchase.down_payment_percent.value(), dec!(25));
    assert_eq!(investment.mortgage.loan_amount(), Money::from_int(300_000));
}

/// Test that conflicting down payments are rejected when the scenario is built
#[test]
fn test_builder_conflicting_down_payment() {
    let config = ScenarioBuilder::new(400_000)
        .down_payment(100_000)
        .down_payment_percent(20)
        .mortgage(5, 30)
        .build();
    let err = HomeInvestment::new("house", &config, &tax_tables()).unwrap_err();

    assert_eq!(
        err,
        ProjectionError::Config(ConfigError::ConflictingDownPayment)
    );
}

/// Test the "other" expense is reported but stays out of the cash flow
#[test]
fn test_builder_other_costs() {
    let config = ScenarioBuilder::new(1_200_000)
        .down_payment_percent(20)
        .mortgage(5, 30)
        .other_costs(1, 0)
        .build();
    let investment = HomeInvestment::new("house", &config, &tax_tables()).unwrap();
    let rows = investment.breakdown().monthly_rows().unwrap();

    assert_eq!(rows[1].flows.other, Money::from_int(1_000));
    assert_eq!(rows[1].flows.operating_cost, Money::ZERO);
    assert_eq!(rows[1].flows.expenses, rows[1].flows.interest);
    assert_eq!(rows[1].flows.cashflow_negative, rows[1].flows.mortgage);
}

/// Test the condo cash flow is the same with or without "other"
#[test]
fn test_other_costs_leave_cashflow_unchanged() {
    let with_other = HomeInvestment::new(
        "condo",
        &condo_builder().other_costs(1, 0).build(),
        &tax_tables(),
    )
    .unwrap();
    let without = HomeInvestment::new("condo", &condo(), &tax_tables()).unwrap();
    let with_rows = with_other.breakdown().monthly_rows().unwrap();
    let without_rows = without.breakdown().monthly_rows().unwrap();

    assert_eq!(with_rows[1].flows.other, Money::new(dec!(741.67)));
    assert_eq!(with_rows[1].flows.cashflow, Money::new(dec!(-455.77)));
    for (a, b) in with_rows.iter().zip(&without_rows) {
        assert_eq!(a.flows.cashflow, b.flows.cashflow);
        assert_eq!(a.snapshot, b.snapshot);
    }
}

/// Test vacancy and management fee follow the current rent
#[test]
fn test_builder_vacancy_and_management_fee() {
    let config = ScenarioBuilder::new(600_000)
        .down_payment_percent(20)
        .mortgage(5, 30)
        .rent(3_000, 10)
        .tenant_rent(2_000, 10)
        .vacancy_percent(5)
        .management_fee_percent(8)
        .build();
    let investment = HomeInvestment::new("rental", &config, &tax_tables()).unwrap();
    let rows = investment.breakdown().monthly_rows().unwrap();

    assert_eq!(rows[1].flows.vacancy, Money::from_int(100));
    assert_eq!(rows[1].flows.management_fee, Money::from_int(240));
    assert_eq!(rows[13].flows.vacancy, Money::from_int(110));
    assert_eq!(rows[13].flows.management_fee, Money::from_int(264));
}
