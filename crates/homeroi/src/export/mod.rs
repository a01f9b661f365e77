//! Projection output: CSV files and console tables

pub mod console;
pub mod csv;

pub use self::console::{render_projection, render_table};
pub use self::csv::{export_all, table_to_csv};
