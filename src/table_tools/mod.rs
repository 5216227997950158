//! Table tools — Read-only tabular diagnostics
//!
//! Thin wrapper over polars: load a tabular data file, enumerate its
//! columns, count rows, and optionally filter rows by case-insensitive
//! substring match on a named column. Nothing here mutates anything;
//! the output is console-oriented inspection of raw data.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Table inspect arguments
#[derive(Debug, Clone)]
pub struct TableInspectArgs {
    /// Path to the tabular data file (CSV with a header row)
    pub table: PathBuf,
    /// Column to filter on (requires `needle`)
    pub column: Option<String>,
    /// Case-insensitive substring to match
    pub needle: Option<String>,
}

/// Table inspect result, suitable for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Column names in file order
    pub columns: Vec<String>,
    /// Total number of data rows
    pub total_rows: usize,
    /// Number of rows matching the filter, when one was given
    pub matched_rows: Option<usize>,
    /// The matching rows themselves, for row-by-row printing
    #[serde(skip)]
    pub matches: Option<DataFrame>,
}

/// Inspect a tabular data file
///
/// Loads the file, reports columns and row count, and when both a
/// column and a needle are given filters rows whose value in that
/// column contains the needle, case-insensitively. Null cells never
/// match (they drop out of the filter mask).
pub fn table_inspect(args: &TableInspectArgs) -> Result<TableReport> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(args.table.clone()))
        .with_context(|| format!("Failed to open table: {}", args.table.display()))?
        .finish()
        .with_context(|| format!("Failed to load table: {}", args.table.display()))?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let total_rows = df.height();
    debug!(
        "Loaded {} with {} columns, {} rows",
        args.table.display(),
        columns.len(),
        total_rows
    );

    let matches = match (&args.column, &args.needle) {
        (Some(column), Some(needle)) => {
            let filtered = df
                .clone()
                .lazy()
                .filter(
                    col(column)
                        .cast(DataType::String)
                        .str()
                        .to_lowercase()
                        .str()
                        .contains_literal(lit(needle.to_lowercase())),
                )
                .collect()
                .with_context(|| format!("Failed to filter on column '{column}'"))?;
            Some(filtered)
        }
        _ => None,
    };

    Ok(TableReport {
        columns,
        total_rows,
        matched_rows: matches.as_ref().map(DataFrame::height),
        matches,
    })
}

/// Print every field of every row, one row block at a time
pub fn print_rows(df: &DataFrame) -> Result<()> {
    for idx in 0..df.height() {
        println!("Row {idx}:");
        for series in df.get_columns() {
            let value = series.get(idx)?;
            match value.get_str() {
                Some(s) => println!("  {}: '{}'", series.name(), s),
                None => println!("  {}: '{}'", series.name(), value),
            }
        }
        println!();
    }
    Ok(())
}
