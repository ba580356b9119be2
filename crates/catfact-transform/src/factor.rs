//! Leveled encodings and their constructors.

use catfact_common::ColumnAdapter;
use catfact_model::{ElementKind, FactorError, LevelOrder, LevelSet, Result};
use tracing::debug;

use crate::levels::{ensure_string_like, extract};

/// A column of values encoded against an ordered set of levels.
///
/// Every non-null row holds the position of one level; nulls stay null
/// and are never a level. Transforms build new factors rather than
/// mutating existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Factor {
    codes: Vec<Option<usize>>,
    levels: LevelSet,
}

impl Factor {
    /// Encode values against explicit levels.
    ///
    /// Fails with [`FactorError::UnknownLevel`] on the first non-null value
    /// that is not a level.
    pub fn from_values<I, S>(values: I, levels: LevelSet) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        Self::encode_values(values, levels, "from_values")
    }

    pub(crate) fn encode_values<I, S>(
        values: I,
        levels: LevelSet,
        operation: &'static str,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let codes = values
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                let Some(value) = value else {
                    return Ok(None);
                };
                let value = value.as_ref();
                levels
                    .position(value)
                    .map(Some)
                    .ok_or_else(|| FactorError::UnknownLevel {
                        operation,
                        value: value.to_string(),
                        row,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { codes, levels })
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    /// Per-row level positions.
    pub fn codes(&self) -> &[Option<usize>] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Level held by `row`, or `None` for a null row or out of range.
    pub fn value(&self, row: usize) -> Option<&str> {
        self.codes
            .get(row)
            .copied()
            .flatten()
            .and_then(|code| self.levels.get(code))
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.codes
            .iter()
            .map(|code| code.and_then(|code| self.levels.get(code)))
    }

    /// Row count per level in level order, unused levels included.
    pub fn level_counts(&self) -> Vec<(&str, usize)> {
        let mut counts = vec![0usize; self.levels.len()];
        for code in self.codes.iter().flatten() {
            counts[*code] += 1;
        }
        self.levels.iter().zip(counts).collect()
    }

    pub fn null_count(&self) -> usize {
        self.codes.iter().filter(|code| code.is_none()).count()
    }

    /// Re-encode the same values against another level set.
    pub fn relevel(&self, levels: LevelSet) -> Result<Self> {
        Self::encode_values(self.values(), levels, "relevel")
    }

    /// Convert to a Polars string series with the given name.
    #[cfg(feature = "polars")]
    pub fn to_series(&self, name: &str) -> polars::prelude::Series {
        use polars::prelude::{NamedFrom, Series};

        let values: Vec<Option<&str>> = self.values().collect();
        Series::new(name.into(), values)
    }
}

impl ColumnAdapter for Factor {
    fn length(&self) -> usize {
        self.len()
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Categorical
    }

    fn to_list(&self) -> Result<Vec<Option<String>>> {
        Ok(self
            .values()
            .map(|value| value.map(str::to_string))
            .collect())
    }

    fn declared_levels(&self) -> Option<LevelSet> {
        Some(self.levels.clone())
    }
}

pub(crate) fn encode<C>(column: &C, levels: LevelSet, operation: &'static str) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    let factor = Factor::encode_values(column.to_list()?, levels, operation)?;
    debug!(
        operation,
        rows = factor.len(),
        levels = factor.levels().len(),
        "built factor"
    );
    Ok(factor)
}

/// Build a factor whose levels follow first appearance.
///
/// # Examples
///
/// ```
/// use catfact_transform::factor;
///
/// let fct = factor(&vec!["c", "a", "c"]).unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["c", "a"]);
/// assert_eq!(fct.codes(), &[Some(0), Some(1), Some(0)]);
/// ```
pub fn factor<C>(column: &C) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    let levels = extract(column, LevelOrder::Appearance, "factor")?;
    encode(column, levels, "factor")
}

/// Encode a column against caller-supplied levels.
///
/// Every non-null value must be one of `levels`; unused levels are kept.
pub fn factor_with_levels<C>(column: &C, levels: LevelSet) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    ensure_string_like(column, "factor_with_levels")?;
    encode(column, levels, "factor_with_levels")
}

/// Current level order of a factor.
pub fn cats(factor: &Factor) -> &LevelSet {
    factor.levels()
}

/// Raw values of any column, nulls included, in row order.
pub fn to_list<C>(column: &C) -> Result<Vec<Option<String>>>
where
    C: ColumnAdapter + ?Sized,
{
    column.to_list()
}
