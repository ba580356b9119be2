//! Level reordering: by appearance, frequency, lexical order, or by a
//! statistic of a companion column.

use std::cmp::Ordering;

use catfact_common::{ColumnAdapter, NumericColumn};
use catfact_model::{FactorError, LevelOrder, LevelSet, ReorderOptions, Result};
use tracing::{debug, trace};

use crate::factor::{Factor, encode};
use crate::levels::{ensure_string_like, extract};

fn reject_ordered(ordered: Option<bool>, operation: &'static str) -> Result<()> {
    match ordered {
        Some(_) => Err(FactorError::unsupported(
            operation,
            "an explicit ordered (ranked) override",
        )),
        None => Ok(()),
    }
}

/// Factor with levels in order of first appearance.
///
/// `ordered` must be `None`; ranked factors are not implemented.
pub fn inorder<C>(column: &C, ordered: Option<bool>) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    reject_ordered(ordered, "inorder")?;
    let levels = extract(column, LevelOrder::Appearance, "inorder")?;
    encode(column, levels, "inorder")
}

/// Factor with levels ordered by frequency, largest first.
///
/// Equal counts keep first-occurrence order. `ordered` must be `None`.
///
/// # Examples
///
/// ```
/// use catfact_transform::infreq;
///
/// let fct = infreq(&vec!["c", "a", "c", "c", "a", "b"], None).unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["c", "a", "b"]);
/// ```
pub fn infreq<C>(column: &C, ordered: Option<bool>) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    reject_ordered(ordered, "infreq")?;
    let levels = extract(column, LevelOrder::Frequency, "infreq")?;
    encode(column, levels, "infreq")
}

/// Factor with levels sorted lexically.
pub fn inseq<C>(column: &C) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    let levels = extract(column, LevelOrder::Lexical, "inseq")?;
    encode(column, levels, "inseq")
}

/// Reorder levels by a per-level statistic of `companion`.
///
/// The statistic is `options.aggregation` (median by default) over the
/// companion values of each level's rows. Levels are sorted ascending, or
/// descending with `options.descending`; levels whose statistic is undefined
/// always come last. Ties keep the current level order.
///
/// # Examples
///
/// ```
/// use catfact_model::ReorderOptions;
/// use catfact_transform::reorder;
///
/// let fct = reorder(&vec!["a", "a", "b"], &vec![4.0, 3.0, 2.0], &ReorderOptions::default())
///     .unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["b", "a"]);
/// ```
pub fn reorder<C, V>(fct: &C, companion: &V, options: &ReorderOptions) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
    V: NumericColumn + ?Sized,
{
    let aggregation = options.aggregation;
    reorder_impl(
        fct,
        companion,
        |values| aggregation.reduce(values),
        options.descending,
    )
}

/// Reorder levels by an arbitrary reduction of `companion`.
///
/// `reducer` receives the non-null companion values of one level and returns
/// its statistic, or `None` when undefined.
pub fn reorder_by<C, V, F>(fct: &C, companion: &V, reducer: F, descending: bool) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
    V: NumericColumn + ?Sized,
    F: Fn(&[f64]) -> Option<f64>,
{
    reorder_impl(fct, companion, reducer, descending)
}

fn reorder_impl<C, V, F>(fct: &C, companion: &V, reducer: F, descending: bool) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
    V: NumericColumn + ?Sized,
    F: Fn(&[f64]) -> Option<f64>,
{
    ensure_string_like(fct, "reorder")?;
    let stats = fct.group_and_aggregate("reorder", companion, reducer)?;

    let mut ranked: Vec<(String, Option<f64>)> = stats
        .into_iter()
        .filter_map(|(level, stat)| {
            let level = level?;
            Some((level, stat.filter(|value| !value.is_nan())))
        })
        .collect();
    ranked.sort_by(|a, b| compare_stats(a.1, b.1, descending));

    for (level, stat) in &ranked {
        trace!(level = level.as_str(), ?stat, "level statistic");
    }
    let levels: LevelSet = ranked.into_iter().map(|(level, _)| level).collect();
    debug!(levels = levels.len(), descending, "reordered levels");
    encode(fct, levels, "reorder")
}

/// Order defined statistics ascending (or descending), undefined last.
fn compare_stats(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_statistics_sort_last_both_ways() {
        let mut stats = vec![None, Some(2.0), Some(1.0), None, Some(3.0)];
        stats.sort_by(|a, b| compare_stats(*a, *b, false));
        assert_eq!(stats, vec![Some(1.0), Some(2.0), Some(3.0), None, None]);

        stats.sort_by(|a, b| compare_stats(*a, *b, true));
        assert_eq!(stats, vec![Some(3.0), Some(2.0), Some(1.0), None, None]);
    }

    #[test]
    fn ordered_override_is_rejected() {
        let err = inorder(&vec!["a"], Some(false)).unwrap_err();
        assert!(matches!(
            err,
            FactorError::Unsupported {
                operation: "inorder",
                ..
            }
        ));
        assert!(infreq(&vec!["a"], Some(true)).is_err());
    }
}
