//! Deduction caps and tax savings

use rust_decimal_macros::dec;

use super::{condo, condo_builder, investment};
use crate::decimal::Money;

/// Year 1: property tax capped at $10k plus $33,582.87 of interest
#[test]
fn test_condo_first_year_deduction() {
    let investment = investment(&condo());
    let deductions = investment.taxes.tax_deduction_per_year();

    assert_eq!(deductions.len(), 31);
    assert_eq!(deductions[0], Money::ZERO);
    assert_eq!(deductions[1], Money::new(dec!(43582.87)));
}

#[test]
fn test_condo_first_year_savings() {
    let investment = investment(&condo());
    let savings = investment.taxes.tax_savings_per_year();

    assert_eq!(savings[0].total(), Money::ZERO);
    assert_eq!(savings[1].federal, Money::new(dec!(6469.00)));
    assert_eq!(savings[1].state, Money::new(dec!(3839.38)));
    assert_eq!(savings[1].per_month(), Money::new(dec!(859.03)));
}

/// Savings are spread flat over the twelve months of a year
#[test]
fn test_monthly_tax_savings_flat_within_year() {
    let investment = investment(&condo());
    let income = &investment.income;

    assert_eq!(income.tax_savings(0), Money::ZERO);
    for month in 1..=12 {
        assert_eq!(income.tax_savings(month), Money::new(dec!(859.03)));
    }
    assert_ne!(income.tax_savings(13), income.tax_savings(12));
}

/// Deduction never exceeds gross income
#[test]
fn test_deduction_clamped_to_income() {
    let config = condo_builder().income_tax(35, dec!(11.3), 20_000).build();
    let investment = investment(&config);

    for deduction in investment.taxes.tax_deduction_per_year() {
        assert!(*deduction <= Money::from_int(20_000));
    }
    // Nothing to gain over the standard deduction at that income
    assert!(
        investment
            .taxes
            .tax_savings_per_year()
            .iter()
            .all(|s| s.federal == Money::ZERO)
    );
}

/// Interest above the $750k acquisition-debt cap is not deductible
#[test]
fn test_large_loan_deduction_uses_capped_interest() {
    let mut config = condo();
    config.purchase.price = Money::from_int(1_500_000);
    let investment = investment(&config);

    let year = investment.mortgage.yearly_mortgage_schedule().next().unwrap();
    assert!(year.deductible_interest < year.interest);
    assert_eq!(
        investment.taxes.tax_deduction_per_year()[1],
        Money::from_int(10_000) + year.deductible_interest
    );
}
