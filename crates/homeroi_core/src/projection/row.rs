//! Monthly projection rows
//!
//! A row splits into [`Flows`] (amounts that happened during the period and
//! add up across periods) and a [`Snapshot`] (balances and running totals at
//! the end of the period). The next month only needs the [`Carry`], the
//! running totals, which is handed forward by value.

use std::ops::AddAssign;

use crate::config::Accounting;
use crate::decimal::{Money, Percent};
use crate::error::{ModelingError, Result};
use crate::investment::HomeInvestment;
use crate::model::{MortgageMonth, row_year};

/// Additive per-period amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flows {
    // Cashflow negative
    pub principal: Money,
    pub interest: Money,
    pub mortgage: Money,
    pub property_tax: Money,
    pub hoi: Money,
    pub hoa: Money,
    pub vacancy: Money,
    pub maintenance: Money,
    pub other: Money,
    pub management_fee: Money,
    /// Everything but the mortgage and `other`
    pub operating_cost: Money,
    /// Interest plus operating cost; the purchase closing cost at month 0
    pub expenses: Money,
    pub cashflow_negative: Money,

    // Cashflow positive
    pub deductible_interest: Money,
    pub tax_savings: Money,
    pub rent: Money,
    pub tenant_rent: Money,
    pub cashflow_positive: Money,

    /// `cashflow_positive - cashflow_negative`
    pub cashflow: Money,
    pub appreciation: Money,
}

impl AddAssign for Flows {
    fn add_assign(&mut self, rhs: Self) {
        self.principal += rhs.principal;
        self.interest += rhs.interest;
        self.mortgage += rhs.mortgage;
        self.property_tax += rhs.property_tax;
        self.hoi += rhs.hoi;
        self.hoa += rhs.hoa;
        self.vacancy += rhs.vacancy;
        self.maintenance += rhs.maintenance;
        self.other += rhs.other;
        self.management_fee += rhs.management_fee;
        self.operating_cost += rhs.operating_cost;
        self.expenses += rhs.expenses;
        self.cashflow_negative += rhs.cashflow_negative;
        self.deductible_interest += rhs.deductible_interest;
        self.tax_savings += rhs.tax_savings;
        self.rent += rhs.rent;
        self.tenant_rent += rhs.tenant_rent;
        self.cashflow_positive += rhs.cashflow_positive;
        self.cashflow += rhs.cashflow;
        self.appreciation += rhs.appreciation;
    }
}

/// Point-in-time values at the end of a period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub net_cashflow_positive: Money,
    pub net_expenses: Money,
    pub net_operating_cost: Money,
    pub net_cashflow: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub loan_balance: Money,

    pub appreciated_price: Money,
    pub total_appreciation: Money,
    pub sale_closing_cost: Money,
    pub equity: Money,
    /// What a sale would put in hand after closing costs and paying off the loan
    pub cash_to_receive: Money,
    pub cashflow_surplus_index_fund_value: Money,
    pub home_investment_value: Money,
    pub home_roi: Percent,

    pub index_fund_value: Money,
    pub index_fund_roi: Percent,
    /// `home_roi - index_fund_roi`
    pub score: Percent,
}

/// Running totals carried from one month into the next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carry {
    pub net_cashflow_positive: Money,
    pub net_expenses: Money,
    pub net_operating_cost: Money,
    pub net_cashflow: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub appreciated_price: Money,
    pub index_fund_value: Money,
    pub cashflow_surplus_index_fund_value: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRow {
    /// 0 is the purchase itself
    pub month: u32,
    pub year: u32,
    pub flows: Flows,
    pub snapshot: Snapshot,
}

impl MonthRow {
    /// Month 0: the purchase closes, nothing recurring is charged yet
    pub fn opening(investment: &HomeInvestment) -> Result<Self> {
        let purchase = &investment.purchase;
        let flows = Flows {
            expenses: purchase.closing_cost,
            cashflow_negative: purchase.initial_cost,
            cashflow: -purchase.initial_cost,
            ..Flows::default()
        };
        let carry = Carry {
            appreciated_price: purchase.price,
            ..Carry::default()
        };
        Self::build(investment, 0, flows, &carry, MortgageMonth::paid_off(0), false)
    }

    /// Fold `mortgage_month` and the month's escalated figures onto `carry`
    pub fn next(
        investment: &HomeInvestment,
        carry: &Carry,
        mortgage_month: MortgageMonth,
    ) -> Result<Self> {
        let month = mortgage_month.month;
        let expenses = &investment.operating_expenses;
        let income = &investment.income;

        let property_tax = expenses.property_tax.at_month(month);
        let hoi = expenses.hoi.at_month(month);
        let hoa = expenses.hoa.at_month(month);
        let vacancy = expenses.vacancy(month);
        let maintenance = expenses.maintenance.at_month(month);
        let other = expenses.other.at_month(month);
        let management_fee = expenses.management_fee(month);
        // "other" is reported but never charged to the cash flow
        let operating_cost = property_tax + hoi + hoa + vacancy + maintenance + management_fee;
        let monthly_expenses = mortgage_month.interest + operating_cost;

        let tax_savings = income.tax_savings(month);
        let rent = income.rent.at_month(month);
        let tenant_rent = income.tenant_rent.at_month(month);
        let cashflow_positive = tax_savings + rent + tenant_rent;
        let cashflow_negative = mortgage_month.principal + monthly_expenses;

        let flows = Flows {
            principal: mortgage_month.principal,
            interest: mortgage_month.interest,
            mortgage: mortgage_month.principal + mortgage_month.interest,
            property_tax,
            hoi,
            hoa,
            vacancy,
            maintenance,
            other,
            management_fee,
            operating_cost,
            expenses: monthly_expenses,
            cashflow_negative,
            deductible_interest: mortgage_month.deductible_interest,
            tax_savings,
            rent,
            tenant_rent,
            cashflow_positive,
            cashflow: cashflow_positive - cashflow_negative,
            appreciation: investment.sale.appreciation_per_month(row_year(month)),
        };

        if investment.accounting == Accounting::NegativeCarry && flows.cashflow.is_positive() {
            return Err(ModelingError::PositiveCashflow {
                month,
                cashflow: flows.cashflow,
            }
            .into());
        }

        Self::build(investment, month, flows, carry, mortgage_month, true)
    }

    fn build(
        investment: &HomeInvestment,
        month: u32,
        flows: Flows,
        carry: &Carry,
        mortgage_month: MortgageMonth,
        compound: bool,
    ) -> Result<Self> {
        let purchase = &investment.purchase;
        let initial_cost = purchase.initial_cost;

        let net_cashflow_positive = carry.net_cashflow_positive + flows.cashflow_positive;
        let net_expenses = carry.net_expenses + flows.expenses;
        let net_cashflow = carry.net_cashflow + flows.cashflow;
        let principal_paid = carry.principal_paid + flows.principal;

        let appreciated_price = carry.appreciated_price + flows.appreciation;
        let total_appreciation = appreciated_price - purchase.price;
        let sale_closing_cost = investment.sale.closing_cost(appreciated_price);
        let equity = total_appreciation + principal_paid + purchase.down_payment;
        let loan_balance = if month == 0 {
            investment.mortgage.loan_amount()
        } else {
            mortgage_month.balance
        };

        // Both funds grow before this month's contribution lands
        let growth = investment.index_fund_monthly_growth();
        let grow = |balance: Money| -> Result<Money> {
            if compound {
                Ok(balance.checked_mul(growth, "index fund growth")?.round_cents())
            } else {
                Ok(balance)
            }
        };
        let mut index_fund_value = grow(carry.index_fund_value)?;
        let mut cashflow_surplus_index_fund_value = grow(carry.cashflow_surplus_index_fund_value)?;
        if flows.cashflow.is_negative() {
            index_fund_value += flows.cashflow.abs();
        } else if flows.cashflow.is_positive() {
            cashflow_surplus_index_fund_value += flows.cashflow;
        }

        let home_investment_value = net_cashflow_positive + equity - net_expenses
            - sale_closing_cost
            + cashflow_surplus_index_fund_value;

        let home_roi = roi(home_investment_value, initial_cost, "home ROI")?;
        let index_fund_roi = roi(index_fund_value, initial_cost, "index fund ROI")?;

        Ok(Self {
            month,
            year: row_year(month),
            flows,
            snapshot: Snapshot {
                net_cashflow_positive,
                net_expenses,
                net_operating_cost: carry.net_operating_cost + flows.operating_cost,
                net_cashflow,
                principal_paid,
                interest_paid: carry.interest_paid + flows.interest,
                loan_balance,
                appreciated_price,
                total_appreciation,
                sale_closing_cost,
                equity,
                cash_to_receive: appreciated_price - sale_closing_cost - loan_balance,
                cashflow_surplus_index_fund_value,
                home_investment_value,
                home_roi,
                index_fund_value,
                index_fund_roi,
                score: home_roi - index_fund_roi,
            },
        })
    }

    /// Running totals for the following month
    pub fn carry(&self) -> Carry {
        let s = &self.snapshot;
        Carry {
            net_cashflow_positive: s.net_cashflow_positive,
            net_expenses: s.net_expenses,
            net_operating_cost: s.net_operating_cost,
            net_cashflow: s.net_cashflow,
            principal_paid: s.principal_paid,
            interest_paid: s.interest_paid,
            appreciated_price: s.appreciated_price,
            index_fund_value: s.index_fund_value,
            cashflow_surplus_index_fund_value: s.cashflow_surplus_index_fund_value,
        }
    }
}

/// `value / base * 100`
pub(crate) fn percent_of(value: Money, base: Money, context: &'static str) -> Result<Percent> {
    let ratio = value.checked_div(base, context)?;
    Ok(ratio.checked_mul(Percent::from_int(100), context)?.cast())
}

/// `value / initial_cost * 100 - 100`
pub(crate) fn roi(value: Money, initial_cost: Money, context: &'static str) -> Result<Percent> {
    Ok(percent_of(value, initial_cost, context)? - Percent::from_int(100))
}
