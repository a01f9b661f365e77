//! Scenario parameter summary printed ahead of the projection

use homeroi_core::HomeInvestment;
use homeroi_core::model::Escalating;

use crate::export::render_table;

/// One titled block of the parameter summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

const ITEM_VALUE: &[&str] = &["item", "value"];
const ESCALATING: &[&str] = &["item", "initial monthly", "annual increase"];

fn pair(item: &str, value: impl ToString) -> Vec<String> {
    vec![item.to_string(), value.to_string()]
}

fn escalating(item: &str, stream: &Escalating) -> Vec<String> {
    vec![
        item.to_string(),
        stream.at_month(1).to_string(),
        stream.rate.to_string(),
    ]
}

pub fn describe(investment: &HomeInvestment) -> Vec<Section> {
    let purchase = &investment.purchase;
    let mortgage = &investment.mortgage;
    let taxes = &investment.taxes;
    let expenses = &investment.operating_expenses;
    let income = &investment.income;
    let sale = &investment.sale;

    vec![
        Section {
            title: "Purchase",
            headers: ITEM_VALUE,
            rows: vec![
                pair("price", purchase.price),
                pair("down payment", purchase.down_payment),
                pair("down payment percent", purchase.down_payment_percent),
                pair("closing cost rate", purchase.closing_cost_rate),
                pair("closing cost", purchase.closing_cost),
                pair("initial cost", purchase.initial_cost),
            ],
        },
        Section {
            title: "Mortgage",
            headers: ITEM_VALUE,
            rows: vec![
                pair("loan amount", mortgage.loan_amount()),
                pair("interest rate", mortgage.interest_rate),
                pair("apy", mortgage.apy()),
                pair("loan term years", mortgage.loan_term_years),
                pair("monthly payment", mortgage.monthly_payment()),
            ],
        },
        Section {
            title: "Operating Expenses",
            headers: ESCALATING,
            rows: vec![
                escalating("property tax", &expenses.property_tax),
                escalating("hoi", &expenses.hoi),
                escalating("hoa", &expenses.hoa),
                escalating("maintenance", &expenses.maintenance),
                escalating("other", &expenses.other),
            ],
        },
        Section {
            title: "Income",
            headers: ESCALATING,
            rows: vec![
                escalating("rent", &income.rent),
                escalating("tenant rent", &income.tenant_rent),
                vec![
                    "vacancy".to_string(),
                    income.vacancy_rate.to_string(),
                    String::new(),
                ],
                vec![
                    "management fee".to_string(),
                    income.management_fee_rate.to_string(),
                    String::new(),
                ],
            ],
        },
        Section {
            title: "Taxes",
            headers: ITEM_VALUE,
            rows: vec![
                pair("yearly income", taxes.yearly_income),
                pair("federal tax rate", taxes.federal_tax_rate),
                pair("state tax rate", taxes.state_tax_rate),
                pair("federal standard deduction", taxes.federal_standard_deduction),
                pair("state standard deduction", taxes.state_standard_deduction),
                pair("property tax limit", taxes.property_tax_limit),
            ],
        },
        Section {
            title: "Sale",
            headers: ITEM_VALUE,
            rows: vec![
                pair("closing cost rate", sale.closing_cost_rate),
                pair("annual appreciation", sale.annual_appreciation_rate),
            ],
        },
        Section {
            title: "Index Fund",
            headers: ITEM_VALUE,
            rows: vec![
                pair("annual return", investment.index_fund_annual_return_rate),
                pair("accounting", format!("{:?}", investment.accounting)),
            ],
        },
    ]
}

/// All sections rendered as console tables, separated by blank lines
pub fn render_description(investment: &HomeInvestment) -> String {
    describe(investment)
        .iter()
        .map(|section| {
            render_table(
                &format!(" {} ", section.title),
                section.headers,
                &section.rows,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
