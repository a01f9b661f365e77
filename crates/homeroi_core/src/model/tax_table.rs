use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// Federal constants used by the deduction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxTable {
    pub standard_deduction: Money,
    /// Cap on deductible state and local property tax
    pub property_tax_limit: Money,
}

/// Per-state constants used by the deduction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTaxTable {
    pub standard_deduction: Money,
}

/// Tax tables injected into [`Taxes`](super::Taxes); loaded once, read-only after
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTables {
    pub federal: FederalTaxTable,
    pub state: StateTaxTable,
}
