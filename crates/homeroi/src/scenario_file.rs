//! Scenario YAML loading

use std::fs;
use std::path::Path;

use homeroi_core::ScenarioConfig;

use crate::errors::LoadError;

/// A parsed scenario together with the name its outputs are filed under
#[derive(Debug, Clone)]
pub struct ScenarioFile {
    pub name: String,
    pub config: ScenarioConfig,
}

/// Read and parse a scenario file. The name is the file stem.
pub fn load_scenario(path: &Path) -> Result<ScenarioFile, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let config = parse_scenario(&content)?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| LoadError::Io(format!("No file name in {}", path.display())))?;

    tracing::info!(scenario = %name, path = %path.display(), "scenario loaded");
    Ok(ScenarioFile { name, config })
}

pub fn parse_scenario(yaml: &str) -> Result<ScenarioConfig, LoadError> {
    serde_saphyr::from_str(yaml)
        .map_err(|e| LoadError::Parse(format!("Failed to parse scenario: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeroi_core::{Accounting, Money};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    const CONDO: &str = "\
purchase:
  price: 890000
  down_payment_percent: 20
  closing_cost_percent: 2
mortgage:
  interest_rate_percent: 4.75
  loan_term_years: 30
taxes:
  property_tax_percent: 1.25
  property_tax_annual_increase_percent: 2
  federal_tax_rate_percent: 35
  state_tax_rate_percent: 11.3
  yearly_income: 500000
operating_expenses:
  hoa: 325
  hoa_annual_increase_percent: 2
income:
  rent: 4000
  rent_annual_increase_percent: 3
sale:
  closing_cost_percent: 8
  annual_appreciation_percent: 5
index_fund_annual_return_percent: 10
";

    #[test]
    fn test_parse_scenario() {
        let config = parse_scenario(CONDO).unwrap();

        assert_eq!(config.purchase.price, Money::from_int(890_000));
        assert_eq!(config.purchase.down_payment, None);
        assert_eq!(config.mortgage.interest_rate_percent, dec!(4.75));
        assert_eq!(config.taxes.state_tax_rate_percent, dec!(11.3));
        assert_eq!(config.operating_expenses.hoa, Money::from_int(325));
        assert_eq!(config.operating_expenses.hoi_percent, dec!(0));
        assert_eq!(config.income.tenant_rent, Money::ZERO);
        assert_eq!(config.index_fund_annual_return_percent, dec!(10));
        assert_eq!(config.accounting, Accounting::DualFund);
    }

    #[test]
    fn test_parse_accounting_variant() {
        let yaml = format!("{CONDO}accounting: negative_carry\n");
        let config = parse_scenario(&yaml).unwrap();
        assert_eq!(config.accounting, Accounting::NegativeCarry);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let yaml = CONDO.replace("  hoa: 325", "  hoa_fee: 325");
        assert!(matches!(parse_scenario(&yaml), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let yaml = CONDO.replace("  yearly_income: 500000\n", "");
        assert!(matches!(parse_scenario(&yaml), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_scenario_names_by_stem() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("condo.yaml");
        fs::write(&path, CONDO).unwrap();

        let scenario = load_scenario(&path).unwrap();
        assert_eq!(scenario.name, "condo");
        assert_eq!(scenario.config.income.rent, Money::from_int(4_000));
    }

    /// The bundled demo scenarios parse and project without error
    #[test]
    fn test_demo_scenarios() {
        let tables = crate::load_tax_tables(None, "ca").unwrap();
        for yaml in [
            include_str!("../../../demos/condo.yaml"),
            include_str!("../../../demos/duplex.yaml"),
        ] {
            let config = parse_scenario(yaml).unwrap();
            let investment = homeroi_core::HomeInvestment::new("demo", &config, &tables).unwrap();
            let years = investment.breakdown().yearly_rows().unwrap();
            assert_eq!(years.len(), 31);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_scenario(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
