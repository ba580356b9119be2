//! Lumping infrequent levels into a catch-all level.

use catfact_common::{ColumnAdapter, NumericColumn};
use catfact_model::{FactorError, LevelSet, LumpOptions, Result};
use indexmap::IndexMap;
use tracing::debug;

use crate::factor::Factor;
use crate::levels::ensure_string_like;

/// Keep the `options.n` most common levels and lump the rest.
///
/// Levels are ranked by row count, or by summed `weights` when given, with
/// ties in first-occurrence order. Levels ranked beyond `n` become
/// `options.fallback`. The fallback level is only added when something was
/// lumped into it.
///
/// # Examples
///
/// ```
/// use catfact_model::LumpOptions;
/// use catfact_transform::lump_n;
///
/// let fct = lump_n(&vec!["c", "a", "c", "c", "a", "b"], &LumpOptions::new(1), None).unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["c", "Other"]);
/// ```
pub fn lump_n<C>(
    fct: &C,
    options: &LumpOptions,
    weights: Option<&dyn NumericColumn>,
) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    ensure_string_like(fct, "lump_n")?;
    let ranked = match weights {
        Some(weights) => weighted_ranking(fct, weights)?,
        None => fct
            .value_counts()?
            .into_iter()
            .filter_map(|(level, _)| level)
            .collect(),
    };

    let mut lookup = IndexMap::with_capacity(ranked.len());
    let mut levels = LevelSet::new();
    for (rank, level) in ranked.iter().enumerate() {
        if rank < options.n {
            levels.insert(level.as_str());
            lookup.insert(level.clone(), level.clone());
        } else {
            lookup.insert(level.clone(), options.fallback.clone());
        }
    }
    let lumped = ranked.len().saturating_sub(options.n);
    if lumped > 0 {
        levels.insert(options.fallback.as_str());
    }
    debug!(
        n = options.n,
        lumped,
        weighted = weights.is_some(),
        fallback = options.fallback.as_str(),
        "lumped levels"
    );

    let values = fct.substitute("lump_n", &lookup, None)?;
    Factor::encode_values(values, levels, "lump_n")
}

/// Levels ranked by total weight, heaviest first.
fn weighted_ranking<C>(fct: &C, weights: &dyn NumericColumn) -> Result<Vec<String>>
where
    C: ColumnAdapter + ?Sized,
{
    if weights.length() != fct.length() {
        return Err(FactorError::Shape {
            operation: "lump_n",
            expected: fct.length(),
            actual: weights.length(),
        });
    }
    let weights = weights.to_f64_values("lump_n")?;

    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for (row, (value, weight)) in fct.to_list()?.into_iter().zip(weights).enumerate() {
        let Some(value) = value else {
            continue;
        };
        let weight = match weight {
            Some(weight) if weight.is_finite() && weight >= 0.0 => weight,
            Some(weight) => {
                return Err(FactorError::InvalidWeight {
                    operation: "lump_n",
                    row,
                    value: weight.to_string(),
                });
            }
            None => {
                return Err(FactorError::InvalidWeight {
                    operation: "lump_n",
                    row,
                    value: "null".to_string(),
                });
            }
        };
        *totals.entry(value).or_insert(0.0) += weight;
    }

    let mut totals: Vec<(String, f64)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(totals.into_iter().map(|(level, _)| level).collect())
}
