//! Data model for categorical factor transforms.
//!
//! - **levels**: [`LevelSet`], the ordered duplicate-free set of levels
//! - **groups**: [`GroupSpec`], explicit renaming/collapsing plans
//! - **options**: ordering policies, reductions, and lumping options
//! - **error**: [`FactorError`] and the crate-wide [`Result`] alias

pub mod error;
pub mod groups;
pub mod kind;
pub mod levels;
pub mod options;

pub use error::{FactorError, Result};
pub use groups::{Group, GroupSpec};
pub use kind::ElementKind;
pub use levels::LevelSet;
pub use options::{
    Aggregation, DEFAULT_FALLBACK, DEFAULT_LUMP_N, LevelOrder, LumpOptions, ReorderOptions,
};
