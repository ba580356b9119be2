//! The column capability contract consumed by factor transforms.
//!
//! A backend implements [`ColumnAdapter`] for its string-like column type and
//! [`NumericColumn`] for numeric companions. Only [`ColumnAdapter::to_list`]
//! and friends must be provided; distinct values, counts, grouped aggregation
//! and substitution come for free on top of them and can be overridden.

use catfact_model::{ElementKind, FactorError, LevelSet, Result};
use indexmap::{IndexMap, IndexSet};

/// A single cell of an in-memory string column.
pub trait CellValue {
    fn as_cell(&self) -> Option<&str>;
}

impl CellValue for String {
    fn as_cell(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl CellValue for &str {
    fn as_cell(&self) -> Option<&str> {
        Some(*self)
    }
}

impl CellValue for Option<String> {
    fn as_cell(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl CellValue for Option<&str> {
    fn as_cell(&self) -> Option<&str> {
        *self
    }
}

/// Capabilities a string-like column must offer.
pub trait ColumnAdapter {
    /// Number of rows, nulls included.
    fn length(&self) -> usize;

    fn element_kind(&self) -> ElementKind;

    /// Every row as an owned optional string, position-preserving.
    fn to_list(&self) -> Result<Vec<Option<String>>>;

    /// Levels the column already carries, for factor-like columns.
    fn declared_levels(&self) -> Option<LevelSet> {
        None
    }

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Distinct values in first-occurrence order.
    fn distinct(&self, drop_nulls: bool) -> Result<Vec<Option<String>>> {
        let mut seen = IndexSet::new();
        for value in self.to_list()? {
            if drop_nulls && value.is_none() {
                continue;
            }
            seen.insert(value);
        }
        Ok(seen.into_iter().collect())
    }

    /// Occurrence counts sorted by count descending.
    ///
    /// The sort is stable, so equal counts keep first-occurrence order.
    /// Nulls are counted under `None`.
    fn value_counts(&self) -> Result<Vec<(Option<String>, usize)>> {
        let mut counts: IndexMap<Option<String>, usize> = IndexMap::new();
        for value in self.to_list()? {
            *counts.entry(value).or_insert(0) += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(counts)
    }

    /// Reduce companion values grouped by the value of this column.
    ///
    /// Groups start with the declared levels (if any) and continue in
    /// first-occurrence order; a group with no rows is reduced over an empty
    /// slice. Null companion values are skipped. Both columns must have the
    /// same length.
    fn group_and_aggregate<V, F>(
        &self,
        operation: &'static str,
        values: &V,
        reducer: F,
    ) -> Result<Vec<(Option<String>, Option<f64>)>>
    where
        V: NumericColumn + ?Sized,
        F: Fn(&[f64]) -> Option<f64>,
    {
        if values.length() != self.length() {
            return Err(FactorError::Shape {
                operation,
                expected: self.length(),
                actual: values.length(),
            });
        }
        let keys = self.to_list()?;
        let values = values.to_f64_values(operation)?;

        let mut groups: IndexMap<Option<String>, Vec<f64>> = IndexMap::new();
        if let Some(levels) = self.declared_levels() {
            for level in levels.iter() {
                groups.entry(Some(level.to_string())).or_default();
            }
        }
        for (key, value) in keys.into_iter().zip(values) {
            let group = groups.entry(key).or_default();
            if let Some(value) = value {
                group.push(value);
            }
        }
        Ok(groups
            .into_iter()
            .map(|(key, group)| (key, reducer(&group)))
            .collect())
    }

    /// Replace every non-null value through `lookup`.
    ///
    /// Values missing from the lookup become `default`; without a default
    /// the substitution is strict and the first unmatched value is an error.
    fn substitute(
        &self,
        operation: &'static str,
        lookup: &IndexMap<String, String>,
        default: Option<&str>,
    ) -> Result<Vec<Option<String>>> {
        self.to_list()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                let Some(value) = value else {
                    return Ok(None);
                };
                if let Some(mapped) = lookup.get(&value) {
                    return Ok(Some(mapped.clone()));
                }
                match default {
                    Some(default) => Ok(Some(default.to_string())),
                    None => Err(FactorError::MappingIncomplete {
                        operation,
                        value,
                        row,
                    }),
                }
            })
            .collect()
    }
}

impl<T: CellValue> ColumnAdapter for [T] {
    fn length(&self) -> usize {
        self.len()
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::String
    }

    fn to_list(&self) -> Result<Vec<Option<String>>> {
        Ok(self
            .iter()
            .map(|value| value.as_cell().map(str::to_string))
            .collect())
    }
}

impl<T: CellValue> ColumnAdapter for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::String
    }

    fn to_list(&self) -> Result<Vec<Option<String>>> {
        self.as_slice().to_list()
    }
}

/// A single cell of an in-memory numeric column.
pub trait NumericCell {
    fn as_f64(&self) -> Option<f64>;
}

impl NumericCell for f64 {
    fn as_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumericCell for Option<f64> {
    fn as_f64(&self) -> Option<f64> {
        *self
    }
}

impl NumericCell for i64 {
    fn as_f64(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl NumericCell for Option<i64> {
    fn as_f64(&self) -> Option<f64> {
        self.map(|value| value as f64)
    }
}

impl NumericCell for i32 {
    fn as_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

/// A numeric column used as a reorder companion or as lumping weights.
pub trait NumericColumn {
    fn length(&self) -> usize;

    /// Every row as an optional `f64`.
    ///
    /// Columns that cannot be reduced numerically fail with
    /// [`FactorError::Unsupported`] tagged with `operation`.
    fn to_f64_values(&self, operation: &'static str) -> Result<Vec<Option<f64>>>;
}

impl<T: NumericCell> NumericColumn for [T] {
    fn length(&self) -> usize {
        self.len()
    }

    fn to_f64_values(&self, _operation: &'static str) -> Result<Vec<Option<f64>>> {
        Ok(self.iter().map(NumericCell::as_f64).collect())
    }
}

impl<T: NumericCell> NumericColumn for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn to_f64_values(&self, operation: &'static str) -> Result<Vec<Option<f64>>> {
        self.as_slice().to_f64_values(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keeps_first_occurrence() {
        let column = vec![Some("b"), None, Some("a"), Some("b"), None];
        assert_eq!(
            column.distinct(true).unwrap(),
            vec![Some("b".to_string()), Some("a".to_string())]
        );
        assert_eq!(column.distinct(false).unwrap().len(), 3);
    }

    #[test]
    fn value_counts_ties_keep_first_occurrence() {
        let column = vec!["x", "y", "y", "z", "x", "w"];
        let counts = column.value_counts().unwrap();
        let order: Vec<_> = counts
            .iter()
            .map(|(value, count)| (value.as_deref().unwrap(), *count))
            .collect();
        assert_eq!(order, vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)]);
    }

    #[test]
    fn substitute_is_strict_without_default() {
        let column = vec![Some("a"), None, Some("q")];
        let mut lookup = IndexMap::new();
        lookup.insert("a".to_string(), "x".to_string());

        let err = column.substitute("collapse", &lookup, None).unwrap_err();
        assert_eq!(
            err,
            FactorError::MappingIncomplete {
                operation: "collapse",
                value: "q".to_string(),
                row: 2,
            }
        );

        let replaced = column.substitute("collapse", &lookup, Some("Z")).unwrap();
        assert_eq!(
            replaced,
            vec![Some("x".to_string()), None, Some("Z".to_string())]
        );
    }

    #[test]
    fn group_and_aggregate_skips_null_values() {
        let keys = vec![Some("a"), Some("b"), Some("a"), None];
        let values = vec![Some(1.0), Some(5.0), None, Some(9.0)];
        let stats = keys
            .group_and_aggregate("reorder", &values, |group| {
                Some(group.iter().sum::<f64>())
            })
            .unwrap();
        assert_eq!(
            stats,
            vec![
                (Some("a".to_string()), Some(1.0)),
                (Some("b".to_string()), Some(5.0)),
                (None, Some(9.0)),
            ]
        );
    }

    #[test]
    fn group_and_aggregate_checks_length() {
        let keys = vec!["a", "b"];
        let values = vec![1.0];
        let err = keys
            .group_and_aggregate("reorder", &values, |_| None)
            .unwrap_err();
        assert!(matches!(
            err,
            FactorError::Shape {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn numeric_cells_widen_to_f64() {
        let ints: Vec<i64> = vec![1, 2];
        assert_eq!(
            ints.to_f64_values("reorder").unwrap(),
            vec![Some(1.0), Some(2.0)]
        );
    }
}
