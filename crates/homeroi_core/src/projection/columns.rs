//! Named column subsets of the projection
//!
//! Views are pure selections over a row's fields; rendering a [`Table`] to
//! text or CSV is left to the caller.

use std::fmt;
use std::str::FromStr;

use super::row::MonthRow;
use super::year::YearRow;
use crate::decimal::{Money, Percent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Month,
    Year,
}

impl Granularity {
    pub fn name(self) -> &'static str {
        match self {
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Month,
    Year,
    Principal,
    Interest,
    Mortgage,
    PropertyTax,
    Hoi,
    Hoa,
    Vacancy,
    Maintenance,
    Other,
    ManagementFee,
    OperatingCost,
    NetOperatingCost,
    Expenses,
    NetExpenses,
    CashflowNegative,
    DeductibleInterest,
    TaxSavings,
    Rent,
    TenantRent,
    Income,
    NetIncome,
    Cashflow,
    NetCashflow,
    CashOnCashReturn,
    Appreciation,
    AppreciatedPrice,
    TotalAppreciation,
    PrincipalPaid,
    InterestPaid,
    LoanBalance,
    Equity,
    SaleClosingCost,
    CashToReceive,
    CashflowSurplusIndexFundValue,
    HomeInvestmentValue,
    HomeRoi,
    IndexFundValue,
    IndexFundRoi,
    Score,
}

impl Column {
    pub const ALL: [Column; 41] = [
        Column::Month,
        Column::Year,
        Column::Principal,
        Column::Interest,
        Column::Mortgage,
        Column::PropertyTax,
        Column::Hoi,
        Column::Hoa,
        Column::Vacancy,
        Column::Maintenance,
        Column::Other,
        Column::ManagementFee,
        Column::OperatingCost,
        Column::NetOperatingCost,
        Column::Expenses,
        Column::NetExpenses,
        Column::CashflowNegative,
        Column::DeductibleInterest,
        Column::TaxSavings,
        Column::Rent,
        Column::TenantRent,
        Column::Income,
        Column::NetIncome,
        Column::Cashflow,
        Column::NetCashflow,
        Column::CashOnCashReturn,
        Column::Appreciation,
        Column::AppreciatedPrice,
        Column::TotalAppreciation,
        Column::PrincipalPaid,
        Column::InterestPaid,
        Column::LoanBalance,
        Column::Equity,
        Column::SaleClosingCost,
        Column::CashToReceive,
        Column::CashflowSurplusIndexFundValue,
        Column::HomeInvestmentValue,
        Column::HomeRoi,
        Column::IndexFundValue,
        Column::IndexFundRoi,
        Column::Score,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Month => "month",
            Column::Year => "year",
            Column::Principal => "principal",
            Column::Interest => "interest",
            Column::Mortgage => "mortgage",
            Column::PropertyTax => "property_tax",
            Column::Hoi => "hoi",
            Column::Hoa => "hoa",
            Column::Vacancy => "vacancy",
            Column::Maintenance => "maintenance",
            Column::Other => "other",
            Column::ManagementFee => "management_fee",
            Column::OperatingCost => "operating_cost",
            Column::NetOperatingCost => "net_operating_cost",
            Column::Expenses => "expenses",
            Column::NetExpenses => "net_expenses",
            Column::CashflowNegative => "cashflow_negative",
            Column::DeductibleInterest => "deductible_interest",
            Column::TaxSavings => "tax_savings",
            Column::Rent => "rent",
            Column::TenantRent => "tenant_rent",
            Column::Income => "income",
            Column::NetIncome => "net_income",
            Column::Cashflow => "cashflow",
            Column::NetCashflow => "net_cashflow",
            Column::CashOnCashReturn => "cash_on_cash_return",
            Column::Appreciation => "appreciation",
            Column::AppreciatedPrice => "appreciated_price",
            Column::TotalAppreciation => "total_appreciation",
            Column::PrincipalPaid => "principal_paid",
            Column::InterestPaid => "interest_paid",
            Column::LoanBalance => "loan_balance",
            Column::Equity => "equity",
            Column::SaleClosingCost => "sale_closing_cost",
            Column::CashToReceive => "cash_to_receive",
            Column::CashflowSurplusIndexFundValue => "cashflow_surplus_index_fund_value",
            Column::HomeInvestmentValue => "home_investment_value",
            Column::HomeRoi => "home_roi",
            Column::IndexFundValue => "index_fund_value",
            Column::IndexFundRoi => "index_fund_roi",
            Column::Score => "score",
        }
    }

    /// Only yearly rows carry a cash-on-cash return
    pub fn applies_to(self, granularity: Granularity) -> bool {
        self != Column::CashOnCashReturn || granularity == Granularity::Year
    }
}

/// A single rendered value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Count(u32),
    Money(Money),
    Percent(Percent),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Count(n) => write!(f, "{n}"),
            Cell::Money(m) => write!(f, "{m}"),
            Cell::Percent(p) => write!(f, "{p}"),
        }
    }
}

/// Read access to a row by [`Column`]
pub trait ProjectionRow {
    /// `None` when the column does not exist at this granularity
    fn cell(&self, column: Column) -> Option<Cell>;
}

macro_rules! shared_cells {
    ($row:expr, $column:expr) => {{
        let f = &$row.flows;
        let s = &$row.snapshot;
        match $column {
            Column::Month => Some(Cell::Count($row.month)),
            Column::Year => Some(Cell::Count($row.year)),
            Column::Principal => Some(Cell::Money(f.principal)),
            Column::Interest => Some(Cell::Money(f.interest)),
            Column::Mortgage => Some(Cell::Money(f.mortgage)),
            Column::PropertyTax => Some(Cell::Money(f.property_tax)),
            Column::Hoi => Some(Cell::Money(f.hoi)),
            Column::Hoa => Some(Cell::Money(f.hoa)),
            Column::Vacancy => Some(Cell::Money(f.vacancy)),
            Column::Maintenance => Some(Cell::Money(f.maintenance)),
            Column::Other => Some(Cell::Money(f.other)),
            Column::ManagementFee => Some(Cell::Money(f.management_fee)),
            Column::OperatingCost => Some(Cell::Money(f.operating_cost)),
            Column::NetOperatingCost => Some(Cell::Money(s.net_operating_cost)),
            Column::Expenses => Some(Cell::Money(f.expenses)),
            Column::NetExpenses => Some(Cell::Money(s.net_expenses)),
            Column::CashflowNegative => Some(Cell::Money(f.cashflow_negative)),
            Column::DeductibleInterest => Some(Cell::Money(f.deductible_interest)),
            Column::TaxSavings => Some(Cell::Money(f.tax_savings)),
            Column::Rent => Some(Cell::Money(f.rent)),
            Column::TenantRent => Some(Cell::Money(f.tenant_rent)),
            Column::Income => Some(Cell::Money(f.cashflow_positive)),
            Column::NetIncome => Some(Cell::Money(s.net_cashflow_positive)),
            Column::Cashflow => Some(Cell::Money(f.cashflow)),
            Column::NetCashflow => Some(Cell::Money(s.net_cashflow)),
            Column::CashOnCashReturn => None,
            Column::Appreciation => Some(Cell::Money(f.appreciation)),
            Column::AppreciatedPrice => Some(Cell::Money(s.appreciated_price)),
            Column::TotalAppreciation => Some(Cell::Money(s.total_appreciation)),
            Column::PrincipalPaid => Some(Cell::Money(s.principal_paid)),
            Column::InterestPaid => Some(Cell::Money(s.interest_paid)),
            Column::LoanBalance => Some(Cell::Money(s.loan_balance)),
            Column::Equity => Some(Cell::Money(s.equity)),
            Column::SaleClosingCost => Some(Cell::Money(s.sale_closing_cost)),
            Column::CashToReceive => Some(Cell::Money(s.cash_to_receive)),
            Column::CashflowSurplusIndexFundValue => {
                Some(Cell::Money(s.cashflow_surplus_index_fund_value))
            }
            Column::HomeInvestmentValue => Some(Cell::Money(s.home_investment_value)),
            Column::HomeRoi => Some(Cell::Percent(s.home_roi)),
            Column::IndexFundValue => Some(Cell::Money(s.index_fund_value)),
            Column::IndexFundRoi => Some(Cell::Percent(s.index_fund_roi)),
            Column::Score => Some(Cell::Percent(s.score)),
        }
    }};
}

impl ProjectionRow for MonthRow {
    fn cell(&self, column: Column) -> Option<Cell> {
        shared_cells!(self, column)
    }
}

impl ProjectionRow for YearRow {
    fn cell(&self, column: Column) -> Option<Cell> {
        match column {
            Column::CashOnCashReturn => Some(Cell::Percent(self.cash_on_cash_return)),
            other => shared_cells!(self, other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnView {
    Full,
    OperatingCost,
    Income,
    Cashflow,
    Investment,
    InvestmentShort,
}

impl ColumnView {
    pub const ALL: [ColumnView; 6] = [
        ColumnView::Full,
        ColumnView::OperatingCost,
        ColumnView::Income,
        ColumnView::Cashflow,
        ColumnView::Investment,
        ColumnView::InvestmentShort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColumnView::Full => "full",
            ColumnView::OperatingCost => "operating_cost",
            ColumnView::Income => "income",
            ColumnView::Cashflow => "cashflow",
            ColumnView::Investment => "investment",
            ColumnView::InvestmentShort => "investment_short",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    pub fn columns(self, granularity: Granularity) -> Vec<Column> {
        use Column::*;

        let period = match granularity {
            Granularity::Month => Month,
            Granularity::Year => Year,
        };
        let yearly = granularity == Granularity::Year;

        match self {
            ColumnView::Full => Column::ALL
                .into_iter()
                .filter(|c| c.applies_to(granularity))
                .collect(),
            ColumnView::OperatingCost => vec![
                Month,
                Year,
                Principal,
                Interest,
                Mortgage,
                PropertyTax,
                Hoi,
                Hoa,
                Vacancy,
                Maintenance,
                Other,
                ManagementFee,
                OperatingCost,
                NetOperatingCost,
            ],
            ColumnView::Income => vec![
                Month,
                Year,
                DeductibleInterest,
                TaxSavings,
                Rent,
                TenantRent,
                Income,
                NetIncome,
            ],
            ColumnView::Cashflow => {
                let mut columns = vec![
                    Month,
                    Year,
                    Income,
                    Mortgage,
                    OperatingCost,
                    Expenses,
                    Cashflow,
                ];
                if yearly {
                    columns.push(CashOnCashReturn);
                }
                columns.extend([Equity, CashToReceive]);
                columns
            }
            ColumnView::Investment => {
                let mut columns = vec![
                    Month,
                    Year,
                    Cashflow,
                    NetCashflow,
                    Equity,
                    CashflowSurplusIndexFundValue,
                    SaleClosingCost,
                    CashToReceive,
                    HomeInvestmentValue,
                    HomeRoi,
                    IndexFundValue,
                    IndexFundRoi,
                    Score,
                ];
                if yearly {
                    columns.push(CashOnCashReturn);
                }
                columns
            }
            ColumnView::InvestmentShort => vec![
                period,
                Cashflow,
                NetCashflow,
                AppreciatedPrice,
                Equity,
                HomeInvestmentValue,
                HomeRoi,
                IndexFundValue,
                IndexFundRoi,
                Score,
            ],
        }
    }
}

impl fmt::Display for ColumnView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnView {
    type Err = String;

    /// Accepts `investment_short` as well as `investment-short`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        ColumnView::ALL
            .into_iter()
            .find(|view| view.name() == normalized)
            .ok_or_else(|| format!("unknown view '{s}'"))
    }
}

/// Rows projected onto one view, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<R: ProjectionRow>(view: ColumnView, granularity: Granularity, rows: &[R]) -> Self {
        let columns = view.columns(granularity);
        Self {
            headers: columns.iter().map(|c| c.name()).collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().filter_map(|c| row.cell(*c)).collect())
                .collect(),
        }
    }
}
