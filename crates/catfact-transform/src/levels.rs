//! Level extraction under the supported ordering policies.

use catfact_common::ColumnAdapter;
use catfact_model::{FactorError, LevelOrder, LevelSet, Result};
use tracing::trace;

/// Fail with a type-kind error unless the column holds strings or categories.
pub(crate) fn ensure_string_like<C>(column: &C, operation: &'static str) -> Result<()>
where
    C: ColumnAdapter + ?Sized,
{
    let kind = column.element_kind();
    if kind.is_string_like() {
        Ok(())
    } else {
        Err(FactorError::TypeKind {
            operation,
            found: kind,
        })
    }
}

/// Derive levels for `operation`, validating the column first.
pub(crate) fn extract<C>(column: &C, order: LevelOrder, operation: &'static str) -> Result<LevelSet>
where
    C: ColumnAdapter + ?Sized,
{
    ensure_string_like(column, operation)?;
    let levels: LevelSet = match order {
        LevelOrder::Appearance => column.distinct(true)?.into_iter().flatten().collect(),
        LevelOrder::Frequency => column
            .value_counts()?
            .into_iter()
            .filter_map(|(value, _)| value)
            .collect(),
        LevelOrder::Lexical => column
            .distinct(true)?
            .into_iter()
            .flatten()
            .collect::<LevelSet>()
            .sorted(),
    };
    trace!(operation, ?order, levels = levels.len(), "extracted levels");
    Ok(levels)
}

/// Distinct non-null values in first-occurrence order.
///
/// # Examples
///
/// ```
/// use catfact_transform::appearance_levels;
///
/// let levels = appearance_levels(&vec![Some("b"), None, Some("a"), Some("b")]).unwrap();
/// assert_eq!(levels.to_vec(), vec!["b", "a"]);
/// ```
pub fn appearance_levels<C>(column: &C) -> Result<LevelSet>
where
    C: ColumnAdapter + ?Sized,
{
    extract(column, LevelOrder::Appearance, "appearance_levels")
}

/// Distinct non-null values, most frequent first.
///
/// Equal counts keep first-occurrence order.
pub fn frequency_levels<C>(column: &C) -> Result<LevelSet>
where
    C: ColumnAdapter + ?Sized,
{
    extract(column, LevelOrder::Frequency, "frequency_levels")
}

/// Distinct non-null values in ascending string order.
pub fn lexical_levels<C>(column: &C) -> Result<LevelSet>
where
    C: ColumnAdapter + ?Sized,
{
    extract(column, LevelOrder::Lexical, "lexical_levels")
}

/// Distinct non-null values under the given ordering policy.
pub fn extract_levels<C>(column: &C, order: LevelOrder) -> Result<LevelSet>
where
    C: ColumnAdapter + ?Sized,
{
    extract(column, order, "extract_levels")
}
