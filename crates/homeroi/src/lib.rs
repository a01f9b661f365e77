//! Home purchase projection CLI
//!
//! Loads a scenario from YAML, runs the `homeroi_core` projection and
//! writes the results as console tables and CSV files.

pub mod describe;
pub mod errors;
pub mod export;
pub mod logging;
pub mod output;
pub mod scenario_file;
pub mod tax_tables;
pub mod util;

pub use errors::LoadError;
pub use logging::init_logging;
pub use scenario_file::{ScenarioFile, load_scenario};
pub use tax_tables::load_tax_tables;
