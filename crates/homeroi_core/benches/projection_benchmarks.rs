//! Criterion benchmarks for homeroi_core projections
//!
//! Run with: cargo bench -p homeroi_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use homeroi_core::model::{FederalTaxTable, StateTaxTable, TaxTables};
use homeroi_core::{HomeInvestment, Money, ScenarioBuilder, ScenarioConfig};
use rust_decimal_macros::dec;

fn tax_tables() -> TaxTables {
    TaxTables {
        federal: FederalTaxTable {
            standard_deduction: Money::from_int(25_100),
            property_tax_limit: Money::from_int(10_000),
        },
        state: StateTaxTable {
            standard_deduction: Money::from_int(9_606),
        },
    }
}

fn create_condo_config(loan_term_years: u32) -> ScenarioConfig {
    ScenarioBuilder::new(890_000)
        .down_payment_percent(20)
        .closing_cost_percent(2)
        .mortgage(dec!(4.75), loan_term_years)
        .property_tax(dec!(1.25), 2)
        .income_tax(35, dec!(11.3), 500_000)
        .hoi(dec!(0.22), 2)
        .hoa(325, 2)
        .maintenance(dec!(0.25), 2)
        .rent(4_000, 3)
        .sale_closing_cost_percent(8)
        .appreciation_percent(5)
        .index_fund_return_percent(10)
        .build()
}

fn bench_scenario_construction(c: &mut Criterion) {
    let config = create_condo_config(30);
    let tables = tax_tables();

    c.bench_function("scenario_construction_30y", |b| {
        b.iter(|| HomeInvestment::new("condo", black_box(&config), &tables))
    });
}

fn bench_monthly_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_projection");
    let tables = tax_tables();

    for years in [10u32, 15, 30] {
        let investment = HomeInvestment::new("condo", &create_condo_config(years), &tables)
            .expect("valid scenario");
        group.bench_with_input(BenchmarkId::from_parameter(years), &investment, |b, inv| {
            b.iter(|| black_box(inv.breakdown().monthly_rows()))
        });
    }

    group.finish();
}

fn bench_yearly_projection(c: &mut Criterion) {
    let investment = HomeInvestment::new("condo", &create_condo_config(30), &tax_tables())
        .expect("valid scenario");

    c.bench_function("yearly_projection_30y", |b| {
        b.iter(|| black_box(investment.breakdown().yearly_rows()))
    });
}

criterion_group!(
    benches,
    bench_scenario_construction,
    bench_monthly_projection,
    bench_yearly_projection
);
criterion_main!(benches);
