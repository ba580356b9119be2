//! Shared column plumbing for factor crates.
//!
//! This crate defines the column capability contract ([`ColumnAdapter`],
//! [`NumericColumn`]) and the backends that implement it: in-memory
//! sequences always, Polars series with the `polars` feature.

pub mod column;
#[cfg(feature = "polars")]
pub mod polars;

pub use column::{CellValue, ColumnAdapter, NumericCell, NumericColumn};
#[cfg(feature = "polars")]
pub use self::polars::element_kind_of;
