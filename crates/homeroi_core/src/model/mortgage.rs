//! Fixed-rate, fully amortizing mortgage
//!
//! The level payment is rounded up to the cent so the loan can never be
//! under-paid by rounding. Each period's interest is rounded half-up to the
//! cent and the remainder of the payment goes to principal. The period that
//! can cover the whole outstanding balance (and always period `n`) pays the
//! balance off exactly, so the principal column sums to the loan amount.
//!
//! A second loan sized to the statutory acquisition-debt limit runs in
//! parallel; its interest caps how much of the real interest is deductible.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::escalation::MONTHS_PER_YEAR;
use super::purchase::Purchase;
use crate::decimal::{Money, Rate};
use crate::error::{ArithmeticError, ConfigError, ProjectionError};

/// Statutory cap on acquisition debt whose interest is deductible ($750,000)
pub const MAX_DEDUCTIBLE_LOAN: Money = Money::new(Decimal::from_parts(750_000, 0, 0, false, 0));

/// A plain amortizing loan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    payment: Money,
}

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installment {
    /// 1-based period number
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
    /// Outstanding balance after this payment
    pub balance: Money,
}

impl Installment {
    pub fn payment(&self) -> Money {
        self.principal + self.interest
    }
}

impl Loan {
    /// Fails when the level payment overflows, e.g. for an absurd rate over a long term
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Result<Self, ArithmeticError> {
        let payment = level_payment(principal, annual_rate / MONTHS_PER_YEAR, term_months)?;
        Ok(Self {
            principal,
            annual_rate,
            term_months,
            payment,
        })
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate / MONTHS_PER_YEAR
    }

    /// Level monthly payment, rounded up to the cent
    pub fn monthly_payment(&self) -> Money {
        self.payment
    }

    /// Lazy month-by-month schedule. Restartable: every call starts over.
    pub fn schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule {
            payment: self.payment,
            monthly_rate: self.monthly_rate(),
            term_months: self.term_months,
            balance: self.principal,
            period: 0,
            finished: self.term_months == 0,
        }
    }
}

fn level_payment(
    principal: Money,
    monthly_rate: Rate,
    term_months: u32,
) -> Result<Money, ArithmeticError> {
    if term_months == 0 {
        return Ok(Money::ZERO);
    }
    if monthly_rate.is_zero() {
        return Ok((principal / term_months).ceil_cents());
    }
    // P * i / (1 - (1 + i)^-n), written with (1 + i)^n to avoid a reciprocal
    let growth = (Rate::ONE + monthly_rate).checked_powu(u64::from(term_months), "loan payment")?;
    let payment = principal
        .checked_mul(monthly_rate, "loan payment")?
        .checked_mul(growth, "loan payment")?;
    Ok((payment / (growth - Rate::ONE)).ceil_cents())
}

/// Iterator over the [`Installment`]s of a [`Loan`]
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    payment: Money,
    monthly_rate: Rate,
    term_months: u32,
    balance: Money,
    period: u32,
    finished: bool,
}

impl Iterator for AmortizationSchedule {
    type Item = Installment;

    fn next(&mut self) -> Option<Installment> {
        if self.finished {
            return None;
        }
        self.period += 1;

        let interest = (self.balance * self.monthly_rate).round_cents();
        let pays_off = self.payment >= self.balance + interest || self.period >= self.term_months;
        let principal = if pays_off {
            self.finished = true;
            self.balance
        } else {
            self.payment - interest
        };
        self.balance -= principal;

        Some(Installment {
            period: self.period,
            principal,
            interest,
            balance: self.balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = (self.term_months - self.period) as usize;
        (1.min(remaining), Some(remaining))
    }
}

/// One month of the mortgage, with the deductible share of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MortgageMonth {
    pub month: u32,
    pub principal: Money,
    pub interest: Money,
    pub deductible_interest: Money,
    pub balance: Money,
}

impl MortgageMonth {
    /// A month after the loan has been paid off
    pub fn paid_off(month: u32) -> Self {
        Self {
            month,
            principal: Money::ZERO,
            interest: Money::ZERO,
            deductible_interest: Money::ZERO,
            balance: Money::ZERO,
        }
    }
}

/// Twelve (or, for a loan that ends mid-year, fewer) months folded together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MortgageYear {
    /// 1-based year number
    pub year: u32,
    pub principal: Money,
    pub interest: Money,
    pub deductible_interest: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mortgage {
    pub interest_rate: Rate,
    pub loan_term_years: u32,
    pub loan: Loan,
    /// Shadow loan at the deductible-debt cap; never disbursed
    pub max_deductible_loan: Loan,
}

impl Mortgage {
    /// `loan_term_years` must be a whole, positive number of years
    pub fn new(
        purchase: &Purchase,
        interest_rate: Rate,
        loan_term_years: Decimal,
    ) -> Result<Self, ProjectionError> {
        if !loan_term_years.fract().is_zero() {
            return Err(ConfigError::FractionalLoanTerm {
                years: loan_term_years,
            }
            .into());
        }
        if interest_rate.is_negative() {
            return Err(ConfigError::Negative {
                field: "mortgage.interest_rate_percent",
            }
            .into());
        }
        let loan_term_years = loan_term_years
            .to_u32()
            .filter(|years| *years > 0)
            .ok_or(ConfigError::ZeroLoanTerm)?;
        let term_months =
            loan_term_years
                .checked_mul(MONTHS_PER_YEAR)
                .ok_or(ArithmeticError::Overflow {
                    context: "loan term in months",
                })?;

        let loan_amount = purchase.loan_amount();
        Ok(Self {
            interest_rate,
            loan_term_years,
            loan: Loan::new(loan_amount, interest_rate, term_months)?,
            max_deductible_loan: Loan::new(
                loan_amount.min(MAX_DEDUCTIBLE_LOAN),
                interest_rate,
                term_months,
            )?,
        })
    }

    pub fn loan_amount(&self) -> Money {
        self.loan.principal
    }

    pub fn loan_term_months(&self) -> u32 {
        self.loan.term_months
    }

    pub fn monthly_payment(&self) -> Money {
        self.loan.monthly_payment()
    }

    /// Effective annual rate of monthly compounding: `(1 + r/12)^12 - 1`.
    /// Cannot overflow once a payment over at least twelve months was computed.
    pub fn apy(&self) -> Rate {
        (Rate::ONE + self.loan.monthly_rate()).powu(u64::from(MONTHS_PER_YEAR)) - Rate::ONE
    }

    /// Monthly schedule with `deductible = min(capped loan interest, interest)`
    pub fn monthly_mortgage_schedule(&self) -> MonthlyMortgageSchedule {
        MonthlyMortgageSchedule {
            actual: self.loan.schedule(),
            capped: self.max_deductible_loan.schedule(),
        }
    }

    pub fn yearly_mortgage_schedule(&self) -> YearlyMortgageSchedule {
        YearlyMortgageSchedule {
            months: self.monthly_mortgage_schedule(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonthlyMortgageSchedule {
    actual: AmortizationSchedule,
    capped: AmortizationSchedule,
}

impl Iterator for MonthlyMortgageSchedule {
    type Item = MortgageMonth;

    fn next(&mut self) -> Option<MortgageMonth> {
        let installment = self.actual.next()?;
        let capped_interest = self
            .capped
            .next()
            .map(|capped| capped.interest)
            .unwrap_or(Money::ZERO);

        Some(MortgageMonth {
            month: installment.period,
            principal: installment.principal,
            interest: installment.interest,
            deductible_interest: capped_interest.min(installment.interest),
            balance: installment.balance,
        })
    }
}

#[derive(Debug, Clone)]
pub struct YearlyMortgageSchedule {
    months: MonthlyMortgageSchedule,
}

impl Iterator for YearlyMortgageSchedule {
    type Item = MortgageYear;

    fn next(&mut self) -> Option<MortgageYear> {
        let first = self.months.next()?;
        let mut year = MortgageYear {
            year: (first.month - 1) / MONTHS_PER_YEAR + 1,
            principal: first.principal,
            interest: first.interest,
            deductible_interest: first.deductible_interest,
        };

        let mut month = first.month;
        while month % MONTHS_PER_YEAR != 0 {
            let Some(next) = self.months.next() else {
                break;
            };
            year.principal += next.principal;
            year.interest += next.interest;
            year.deductible_interest += next.deductible_interest;
            month = next.month;
        }

        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Percent;
    use crate::model::purchase::DownPayment;
    use rust_decimal_macros::dec;

    fn purchase(price: i64, down_percent: i64) -> Purchase {
        Purchase::new(
            Money::from_int(price),
            DownPayment::PercentOfPrice(Percent::from_int(down_percent)),
            Rate::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn test_fractional_term_rejected() {
        let err = Mortgage::new(
            &purchase(500_000, 20),
            Rate::from_percent(dec!(5)),
            dec!(29.5),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::FractionalLoanTerm { years: dec!(29.5) }.into()
        );
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = Mortgage::new(&purchase(500_000, 20), Rate::ZERO, dec!(0)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroLoanTerm.into());
    }

    #[test]
    fn test_payment_overflow_is_reported() {
        let err = Loan::new(Money::from_int(712_000), Rate::from_percent(dec!(300)), 360)
            .unwrap_err();
        assert_eq!(err, ArithmeticError::Overflow { context: "loan payment" });
    }

    #[test]
    fn test_term_in_months_overflow_is_reported() {
        let err = Mortgage::new(
            &purchase(500_000, 20),
            Rate::from_percent(dec!(5)),
            dec!(400000000),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::Overflow {
                context: "loan term in months"
            }
            .into()
        );
    }

    #[test]
    fn test_whole_term_written_with_decimal_point_is_accepted() {
        let mortgage =
            Mortgage::new(&purchase(500_000, 20), Rate::from_percent(dec!(5)), dec!(30.0))
                .unwrap();
        assert_eq!(mortgage.loan_term_months(), 360);
    }

    #[test]
    fn test_zero_rate_payment_spreads_principal() {
        let loan = Loan::new(Money::from_int(1_000), Rate::ZERO, 12).unwrap();
        assert_eq!(loan.monthly_payment(), Money::new(dec!(83.34)));

        let schedule: Vec<_> = loan.schedule().collect();
        assert_eq!(schedule.len(), 12);
        assert!(schedule.iter().all(|i| i.interest == Money::ZERO));
        assert_eq!(schedule[11].principal, Money::new(dec!(83.26)));
        assert_eq!(schedule[11].balance, Money::ZERO);
    }

    #[test]
    fn test_small_loan_pays_off_early() {
        // one cent a month clears a dollar long before 30 years
        let loan = Loan::new(Money::ONE, Rate::from_percent(dec!(1)), 360).unwrap();
        let schedule: Vec<_> = loan.schedule().collect();
        assert!(schedule.len() < 360);
        let total: Money = schedule.iter().map(|i| i.principal).sum();
        assert_eq!(total, Money::ONE);
    }

    #[test]
    fn test_deductible_interest_capped_above_limit() {
        let mortgage = Mortgage::new(
            &purchase(1_500_000, 20),
            Rate::from_percent(dec!(4)),
            dec!(30),
        )
        .unwrap();
        assert_eq!(mortgage.max_deductible_loan.principal, MAX_DEDUCTIBLE_LOAN);

        let first = mortgage.monthly_mortgage_schedule().next().unwrap();
        assert_eq!(first.interest, Money::from_int(4_000));
        assert_eq!(first.deductible_interest, Money::from_int(2_500));
    }

    #[test]
    fn test_yearly_schedule_folds_twelve_months() {
        let mortgage = Mortgage::new(
            &purchase(890_000, 20),
            Rate::from_percent(dec!(4.75)),
            dec!(30),
        )
        .unwrap();

        let months: Vec<_> = mortgage.monthly_mortgage_schedule().collect();
        let years: Vec<_> = mortgage.yearly_mortgage_schedule().collect();
        assert_eq!(years.len(), 30);

        for year in &years {
            let range = ((year.year - 1) * 12) as usize..(year.year * 12) as usize;
            let principal: Money = months[range.clone()].iter().map(|m| m.principal).sum();
            let interest: Money = months[range].iter().map(|m| m.interest).sum();
            assert_eq!(year.principal, principal);
            assert_eq!(year.interest, interest);
        }
    }

    #[test]
    fn test_apy() {
        let mortgage =
            Mortgage::new(&purchase(500_000, 20), Rate::from_percent(dec!(12)), dec!(30))
                .unwrap();
        // (1.01)^12 - 1
        assert_eq!(
            mortgage.apy().value().round_dp(6),
            dec!(0.126825)
        );
    }
}
