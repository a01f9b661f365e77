//! Home purchase projection library
//!
//! This crate projects the month-by-month and year-by-year cash flow and net
//! worth of buying a home with a fixed-rate mortgage, compared against
//! investing the same cash in an index fund. It supports:
//! - Exact fixed-point money, rate and percent types
//! - Level-payment amortization with a deduction-capped shadow loan
//! - Property tax and mortgage interest deductions against standard deductions
//! - Yearly escalation of rent and operating costs
//! - Appreciation and sale costs
//! - Dual index-fund comparison and ROI per month and per year
//!
//! The crate is pure: no I/O, no clock, no randomness. The same scenario always
//! yields the same rows.
//!
//! # Builder DSL
//!
//! ```ignore
//! use homeroi_core::{HomeInvestment, ScenarioBuilder};
//!
//! let config = ScenarioBuilder::new(890_000)
//!     .down_payment_percent(20)
//!     .closing_cost_percent(2)
//!     .mortgage(dec!(4.75), 30)
//!     .build();
//! let investment = HomeInvestment::new("condo", &config, &tax_tables)?;
//! let years = investment.breakdown().yearly_rows()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod decimal;
pub mod error;
pub mod investment;
pub mod projection;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{Accounting, ScenarioBuilder, ScenarioConfig};
pub use decimal::{Money, Percent, Rate};
pub use error::{ArithmeticError, ConfigError, ModelingError, ProjectionError};
pub use investment::HomeInvestment;
pub use model::TaxTables;
pub use projection::{
    ColumnView, Granularity, InvestmentBreakdown, MonthRow, Table, YearRow,
};
