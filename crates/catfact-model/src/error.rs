use thiserror::Error;

use crate::kind::ElementKind;

/// Errors raised by factor construction and level transforms.
///
/// Every variant carries enough context to diagnose the failure locally:
/// the operation, the broken precondition, and the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorError {
    /// The input column is not string-like.
    #[error("{operation}: expected a string or categorical column, found {found}")]
    TypeKind {
        operation: &'static str,
        found: ElementKind,
    },

    /// A companion column does not line up with the factor.
    #[error("{operation}: companion has {actual} rows but the factor has {expected}")]
    Shape {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value has no matching group and no fallback was supplied.
    #[error(
        "{operation}: value '{value}' at row {row} is not covered by any group and no fallback was given"
    )]
    MappingIncomplete {
        operation: &'static str,
        value: String,
        row: usize,
    },

    /// A parameter combination that is not implemented.
    #[error("{operation}: {detail} is not supported")]
    Unsupported {
        operation: &'static str,
        detail: String,
    },

    /// The same old level is claimed by two groups.
    #[error("{operation}: level '{level}' is assigned to both '{first}' and '{second}'")]
    DuplicateAssignment {
        operation: &'static str,
        level: String,
        first: String,
        second: String,
    },

    /// A value is not a member of the level set it is encoded against.
    #[error("{operation}: value '{value}' at row {row} is not one of the factor levels")]
    UnknownLevel {
        operation: &'static str,
        value: String,
        row: usize,
    },

    /// A level set was built from a list containing duplicates.
    #[error("{operation}: duplicate level '{level}'")]
    DuplicateLevel {
        operation: &'static str,
        level: String,
    },

    /// A lumping weight is negative, NaN, infinite, or missing.
    #[error("{operation}: weight {value} at row {row} must be finite and non-negative")]
    InvalidWeight {
        operation: &'static str,
        row: usize,
        value: String,
    },

    /// The column backend failed.
    #[error("column backend error: {message}")]
    Backend { message: String },
}

impl FactorError {
    pub fn unsupported(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Unsupported {
            operation,
            detail: detail.into(),
        }
    }

    pub fn backend(error: impl std::fmt::Display) -> Self {
        Self::Backend {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FactorError>;
