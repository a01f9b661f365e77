//! Federal and state tax table loading
//!
//! The default tables are compiled in. A tax directory laid out as
//! `federal.yaml` plus `state/<code>.yaml` replaces them entirely.

use std::fs;
use std::path::Path;

use homeroi_core::ConfigError;
use homeroi_core::model::{FederalTaxTable, StateTaxTable, TaxTables};
use serde::de::DeserializeOwned;

use crate::errors::LoadError;

const FEDERAL: &str = include_str!("../taxes/federal.yaml");
const STATES: &[(&str, &str)] = &[("ca", include_str!("../taxes/state/ca.yaml"))];

/// Load the federal table and the table for `state`
pub fn load_tax_tables(tax_dir: Option<&Path>, state: &str) -> Result<TaxTables, LoadError> {
    let state = state.to_ascii_lowercase();
    let tables = match tax_dir {
        Some(dir) => TaxTables {
            federal: read_table(&dir.join("federal.yaml"), "federal")?,
            state: read_table(&dir.join("state").join(format!("{state}.yaml")), &state)?,
        },
        None => builtin_tables(&state)?,
    };

    tracing::debug!(
        state = %state,
        federal_standard_deduction = %tables.federal.standard_deduction,
        state_standard_deduction = %tables.state.standard_deduction,
        "tax tables loaded"
    );
    Ok(tables)
}

fn builtin_tables(state: &str) -> Result<TaxTables, LoadError> {
    let state_yaml = STATES
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, yaml)| *yaml)
        .ok_or_else(|| ConfigError::UnknownTaxTable {
            name: state.to_string(),
        })?;

    Ok(TaxTables {
        federal: parse_table::<FederalTaxTable>(FEDERAL, "federal")?,
        state: parse_table::<StateTaxTable>(state_yaml, state)?,
    })
}

fn read_table<T: DeserializeOwned>(path: &Path, name: &str) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(ConfigError::UnknownTaxTable {
            name: name.to_string(),
        }
        .into());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_table(&content, name)
}

fn parse_table<T: DeserializeOwned>(yaml: &str, name: &str) -> Result<T, LoadError> {
    serde_saphyr::from_str(yaml)
        .map_err(|e| LoadError::Parse(format!("Failed to parse tax table '{}': {}", name, e)))
}
