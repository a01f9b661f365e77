use super::row::{Carry, MonthRow};
use super::year::{YearRow, fold_years};
use crate::error::Result;
use crate::investment::HomeInvestment;
use crate::model::{MonthlyMortgageSchedule, MortgageMonth};

/// Monthly and yearly projections of one [`HomeInvestment`]
#[derive(Debug, Clone, Copy)]
pub struct InvestmentBreakdown<'a> {
    investment: &'a HomeInvestment,
}

impl<'a> InvestmentBreakdown<'a> {
    pub fn new(investment: &'a HomeInvestment) -> Self {
        Self { investment }
    }

    /// Lazy rows for months `0..=loan_term_months`. Every call starts over
    /// from month 0 and yields the same sequence.
    pub fn monthly(&self) -> MonthlyRows<'a> {
        MonthlyRows {
            investment: self.investment,
            schedule: self.investment.mortgage.monthly_mortgage_schedule(),
            carry: None,
            month: 0,
            done: false,
        }
    }

    /// All monthly rows, or the first error; never a truncated list
    pub fn monthly_rows(&self) -> Result<Vec<MonthRow>> {
        self.monthly().collect()
    }

    pub fn yearly_rows(&self) -> Result<Vec<YearRow>> {
        let months = self.monthly_rows()?;
        fold_years(&months, self.investment.purchase.initial_cost)
    }
}

/// Iterator behind [`InvestmentBreakdown::monthly`]. Stops after the first
/// error.
#[derive(Debug, Clone)]
pub struct MonthlyRows<'a> {
    investment: &'a HomeInvestment,
    schedule: MonthlyMortgageSchedule,
    carry: Option<Carry>,
    month: u32,
    done: bool,
}

impl Iterator for MonthlyRows<'_> {
    type Item = Result<MonthRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.month > self.investment.mortgage.loan_term_months() {
            return None;
        }

        let row = match self.carry {
            None => MonthRow::opening(self.investment),
            Some(carry) => {
                let mortgage_month = self
                    .schedule
                    .next()
                    .unwrap_or(MortgageMonth::paid_off(self.month));
                MonthRow::next(self.investment, &carry, mortgage_month)
            }
        };

        match &row {
            Ok(row) => {
                self.carry = Some(row.carry());
                self.month += 1;
            }
            Err(_) => self.done = true,
        }
        Some(row)
    }
}
