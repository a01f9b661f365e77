use super::row::{Flows, MonthRow, Snapshot, percent_of};
use crate::decimal::{Money, Percent};
use crate::error::Result;

/// Months of one row year folded together: flows are summed, the snapshot is
/// the last month's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRow {
    pub year: u32,
    /// Last month folded into this year
    pub month: u32,
    /// Number of months folded (1 for year 0)
    pub months: u32,
    pub flows: Flows,
    pub snapshot: Snapshot,
    /// The year's net cash flow as a share of the initial cost
    pub cash_on_cash_return: Percent,
}

/// Fold consecutive months sharing a row year. Month 0 forms year 0 on its
/// own; a trailing partial year is still emitted.
pub fn fold_years(months: &[MonthRow], initial_cost: Money) -> Result<Vec<YearRow>> {
    months
        .chunk_by(|a, b| a.year == b.year)
        .map(|chunk| fold_year(chunk, initial_cost))
        .collect()
}

fn fold_year(chunk: &[MonthRow], initial_cost: Money) -> Result<YearRow> {
    // chunk_by never yields an empty slice
    let first = &chunk[0];
    let last = &chunk[chunk.len() - 1];

    let mut flows = first.flows;
    for row in &chunk[1..] {
        flows += row.flows;
    }

    Ok(YearRow {
        year: first.year,
        month: last.month,
        months: chunk.len() as u32,
        flows,
        snapshot: last.snapshot,
        cash_on_cash_return: percent_of(flows.cashflow, initial_cost, "cash on cash return")?,
    })
}
