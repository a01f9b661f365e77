use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use homeroi_core::projection::Cell;
use homeroi_core::{ColumnView, Granularity, MonthRow, Table, YearRow};

use crate::util::atomic_write_bytes;

/// Plain numeric form of a cell; CSV consumers get no currency formatting
fn csv_field(cell: &Cell) -> String {
    match cell {
        Cell::Count(n) => n.to_string(),
        Cell::Money(m) => m.value().to_string(),
        Cell::Percent(p) => p.value().to_string(),
    }
}

pub fn table_to_csv(table: &Table) -> color_eyre::Result<Vec<u8>> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(csv_field))?;
    }
    writer
        .into_inner()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to flush CSV buffer: {}", e.error()))
}

fn write_view(
    dir: &Path,
    view: ColumnView,
    granularity: Granularity,
    table: &Table,
) -> color_eyre::Result<PathBuf> {
    let path = dir.join(view.file_name());
    let bytes = table_to_csv(table)?;
    atomic_write_bytes(&path, &bytes)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        granularity = granularity.name(),
        rows = table.rows.len(),
        "csv written"
    );
    Ok(path)
}

/// Write every view at both granularities to
/// `<output_dir>/<scenario>/<month|year>/<view>.csv`
pub fn export_all(
    output_dir: &Path,
    scenario: &str,
    months: &[MonthRow],
    years: &[YearRow],
) -> color_eyre::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ColumnView::ALL.len() * 2);

    for granularity in [Granularity::Month, Granularity::Year] {
        let dir = output_dir.join(scenario).join(granularity.name());
        fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;

        for view in ColumnView::ALL {
            let table = match granularity {
                Granularity::Month => Table::new(view, granularity, months),
                Granularity::Year => Table::new(view, granularity, years),
            };
            written.push(write_view(&dir, view, granularity, &table)?);
        }
    }

    tracing::info!(
        scenario,
        files = written.len(),
        dir = %output_dir.join(scenario).display(),
        "csv export complete"
    );
    Ok(written)
}
