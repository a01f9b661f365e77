//! Row-accumulation projection engine
//!
//! Month 0 is the purchase. Every later month folds the mortgage schedule and
//! the escalated income and expense figures onto the previous month's running
//! totals. Yearly rows are folds of the monthly rows.

mod breakdown;
mod columns;
mod row;
mod year;

pub use breakdown::{InvestmentBreakdown, MonthlyRows};
pub use columns::{Cell, Column, ColumnView, Granularity, ProjectionRow, Table};
pub use row::{Carry, Flows, MonthRow, Snapshot};
pub use year::{YearRow, fold_years};
