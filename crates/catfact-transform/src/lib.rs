//! Categorical factor transforms.
//!
//! Every operation takes a column through the [`ColumnAdapter`] contract (a
//! plain `Vec`, a Polars `Series`, or an existing [`Factor`]) and returns a
//! new [`Factor`]; inputs are never mutated.
//!
//! - **levels**: level extraction by appearance, frequency, or lexical order
//! - **factor**: the [`Factor`] encoding and its constructors
//! - **reorder**: `inorder`, `infreq`, `inseq`, and companion-driven `reorder`
//! - **mapping**: `collapse` and `recode` through a [`GroupSpec`]
//! - **lump**: `lump_n`, keeping the most frequent levels
//!
//! # Example
//!
//! ```
//! use catfact_model::{GroupSpec, LumpOptions};
//! use catfact_transform::{collapse, infreq, lump_n};
//!
//! let raw = vec!["c", "a", "c", "c", "a", "b"];
//!
//! let by_freq = infreq(&raw, None).unwrap();
//! assert_eq!(by_freq.levels().to_vec(), vec!["c", "a", "b"]);
//!
//! let lumped = lump_n(&by_freq, &LumpOptions::new(1), None).unwrap();
//! assert_eq!(lumped.levels().to_vec(), vec!["c", "Other"]);
//!
//! let groups = GroupSpec::new().group("ac", ["a", "c"]);
//! let collapsed = collapse(&raw, Some("rest"), &groups).unwrap();
//! assert_eq!(collapsed.levels().to_vec(), vec!["ac", "rest"]);
//! ```
//!
//! [`ColumnAdapter`]: catfact_common::ColumnAdapter
//! [`GroupSpec`]: catfact_model::GroupSpec

mod factor;
mod levels;
mod lump;
mod mapping;
mod reorder;

pub use factor::{Factor, cats, factor, factor_with_levels, to_list};
pub use levels::{appearance_levels, extract_levels, frequency_levels, lexical_levels};
pub use lump::lump_n;
pub use mapping::{collapse, recode};
pub use reorder::{inorder, infreq, inseq, reorder, reorder_by};
