use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;
use homeroi::describe::render_description;
use homeroi::export::{export_all, render_projection};
use homeroi::output::clear_output_dir;
use homeroi::{init_logging, load_scenario, load_tax_tables};
use homeroi_core::{ColumnView, Granularity, HomeInvestment};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Period {
    Month,
    Year,
}

impl From<Period> for Granularity {
    fn from(period: Period) -> Self {
        match period {
            Period::Month => Granularity::Month,
            Period::Year => Granularity::Year,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "homeroi")]
#[command(about = "Project the cash flow and return of buying a home against an index fund")]
struct Args {
    /// Scenario YAML file
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the CSV files are written under
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Remove everything inside the output directory first
    #[arg(short, long)]
    delete_output: bool,

    /// Directory holding federal.yaml and state/<code>.yaml (default: built-in tables)
    #[arg(long)]
    tax_dir: Option<PathBuf>,

    /// State tax table code
    #[arg(long, default_value = "ca")]
    state: String,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Column view printed to the console
    #[arg(long, default_value = "investment-short")]
    view: ColumnView,

    /// Console table granularity
    #[arg(long, value_enum, default_value = "year")]
    granularity: Period,

    /// Print the table only, skip CSV export
    #[arg(long)]
    no_csv: bool,

    /// Print the scenario parameters before the projection
    #[arg(long)]
    describe: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let scenario = load_scenario(&args.input)?;
    let tax_tables = load_tax_tables(args.tax_dir.as_deref(), &args.state)?;

    let investment = HomeInvestment::new(&scenario.name, &scenario.config, &tax_tables)
        .wrap_err_with(|| format!("Invalid scenario '{}'", scenario.name))?;

    if args.describe {
        println!("{}", render_description(&investment));
    }

    let breakdown = investment.breakdown();
    let months = breakdown
        .monthly_rows()
        .wrap_err("Monthly projection failed")?;
    let years = breakdown.yearly_rows().wrap_err("Yearly projection failed")?;

    println!(
        "{}",
        render_projection(
            &scenario.name,
            args.view,
            args.granularity.into(),
            &months,
            &years
        )
    );

    if args.delete_output {
        clear_output_dir(&args.output_dir)
            .wrap_err_with(|| format!("Failed to clear {}", args.output_dir.display()))?;
    }
    if !args.no_csv {
        export_all(&args.output_dir, &scenario.name, &months, &years)?;
    }

    if let Some(last) = years.last() {
        tracing::info!(
            scenario = %scenario.name,
            years = last.year,
            home_value = %last.snapshot.home_investment_value,
            home_roi = %last.snapshot.home_roi,
            index_fund_roi = %last.snapshot.index_fund_roi,
            score = %last.snapshot.score,
            "projection complete"
        );
    }

    Ok(())
}
