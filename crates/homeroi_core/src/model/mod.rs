mod escalation;
mod income;
mod mortgage;
mod operating_expenses;
mod purchase;
mod sale;
mod tax_table;
mod taxes;

pub use escalation::{Escalating, MONTHS_PER_YEAR, row_year, year_index};
pub use income::{Income, IncomeParams};
pub use mortgage::{
    AmortizationSchedule, Installment, Loan, MAX_DEDUCTIBLE_LOAN, Mortgage, MortgageMonth,
    MortgageYear, MonthlyMortgageSchedule, YearlyMortgageSchedule,
};
pub use operating_expenses::{OperatingExpenseParams, OperatingExpenses};
pub use purchase::{DownPayment, Purchase};
pub use sale::Sale;
pub use tax_table::{FederalTaxTable, StateTaxTable, TaxTables};
pub use taxes::{TaxParams, TaxSavings, Taxes, tax_savings};
