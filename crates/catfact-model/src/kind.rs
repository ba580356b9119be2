//! Element kinds a column can report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The element type of a column, as far as factor operations care.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    String,
    Categorical,
    Numeric,
    Boolean,
    /// Any other backend type, by its backend name.
    Other(String),
}

impl ElementKind {
    /// Returns true for kinds whose values can become levels.
    pub fn is_string_like(&self) -> bool {
        matches!(self, ElementKind::String | ElementKind::Categorical)
    }

    /// Returns true for kinds that can be reduced to `f64`.
    pub fn is_numeric_like(&self) -> bool {
        matches!(self, ElementKind::Numeric | ElementKind::Boolean)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::String => f.write_str("string"),
            ElementKind::Categorical => f.write_str("categorical"),
            ElementKind::Numeric => f.write_str("numeric"),
            ElementKind::Boolean => f.write_str("boolean"),
            ElementKind::Other(name) => f.write_str(name),
        }
    }
}
