//! Loading factor and companion columns from CSV files.

use std::path::Path;

use anyhow::{Context, Result};
use catfact_common::element_kind_of;
use polars::prelude::*;
use tracing::debug;

/// Read a CSV file with a header row into a data frame.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open {}", path.display()))?
        .finish()
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv"
    );
    Ok(df)
}

/// A column as stored in the frame.
pub fn column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df
        .column(name)
        .with_context(|| format!("column '{name}' not found"))?;
    Ok(column.as_materialized_series().clone())
}

/// A column to be treated as categorical.
///
/// CSV inference turns code-like columns into numbers; those are cast back
/// to strings so they can be factored.
pub fn factor_column(df: &DataFrame, name: &str) -> Result<Series> {
    let series = column(df, name)?;
    if element_kind_of(series.dtype()).is_string_like() {
        return Ok(series);
    }
    debug!(column = name, dtype = %series.dtype(), "casting column to string");
    series
        .cast(&DataType::String)
        .with_context(|| format!("cast column '{name}' to string"))
}
