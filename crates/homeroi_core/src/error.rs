use std::fmt;

use rust_decimal::Decimal;

use crate::decimal::Money;

/// Errors raised while turning scenario parameters into models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither `down_payment` nor `down_payment_percent` was supplied as a nonzero value
    MissingDownPayment,
    /// Both `down_payment` and `down_payment_percent` were supplied
    ConflictingDownPayment,
    /// `loan_term_years` has a fractional part
    FractionalLoanTerm { years: Decimal },
    ZeroLoanTerm,
    NonPositivePrice,
    DownPaymentExceedsPrice { down_payment: Money, price: Money },
    Negative { field: &'static str },
    UnknownTaxTable { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingDownPayment => {
                write!(f, "down_payment or down_payment_percent is required")
            }
            ConfigError::ConflictingDownPayment => {
                write!(
                    f,
                    "down_payment and down_payment_percent are mutually exclusive"
                )
            }
            ConfigError::FractionalLoanTerm { years } => {
                write!(f, "loan_term_years must be a whole number (got {years})")
            }
            ConfigError::ZeroLoanTerm => write!(f, "loan_term_years must be at least 1"),
            ConfigError::NonPositivePrice => write!(f, "purchase price must be positive"),
            ConfigError::DownPaymentExceedsPrice {
                down_payment,
                price,
            } => write!(
                f,
                "down payment {down_payment} exceeds purchase price {price}"
            ),
            ConfigError::Negative { field } => write!(f, "{field} must not be negative"),
            ConfigError::UnknownTaxTable { name } => write!(f, "no tax table named '{name}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Arithmetic failures. These are never recovered from inside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    DivisionByZero { context: &'static str },
    /// The result does not fit in a `Decimal` (or, for month counts, a `u32`)
    Overflow { context: &'static str },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero { context } => {
                write!(f, "division by zero while computing {context}")
            }
            ArithmeticError::Overflow { context } => {
                write!(f, "overflow while computing {context}")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// The scenario contradicts an assumption of the selected accounting variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelingError {
    /// Negative-carry accounting saw a month where the property paid out
    PositiveCashflow { month: u32, cashflow: Money },
}

impl fmt::Display for ModelingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelingError::PositiveCashflow { month, cashflow } => write!(
                f,
                "monthly cashflow is positive in month {month} ({cashflow}); \
                 negative-carry accounting requires every month to cost money"
            ),
        }
    }
}

impl std::error::Error for ModelingError {}

/// Any failure that aborts a projection. A failed projection yields no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    Config(ConfigError),
    Arithmetic(ArithmeticError),
    Modeling(ModelingError),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::Config(e) => write!(f, "configuration error: {e}"),
            ProjectionError::Arithmetic(e) => write!(f, "arithmetic error: {e}"),
            ProjectionError::Modeling(e) => write!(f, "modeling violation: {e}"),
        }
    }
}

impl std::error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectionError::Config(e) => Some(e),
            ProjectionError::Arithmetic(e) => Some(e),
            ProjectionError::Modeling(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ProjectionError {
    fn from(err: ConfigError) -> Self {
        ProjectionError::Config(err)
    }
}

impl From<ArithmeticError> for ProjectionError {
    fn from(err: ArithmeticError) -> Self {
        ProjectionError::Arithmetic(err)
    }
}

impl From<ModelingError> for ProjectionError {
    fn from(err: ModelingError) -> Self {
        ProjectionError::Modeling(err)
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
