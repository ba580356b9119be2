//! Renaming and collapsing levels through explicit group plans.

use catfact_common::ColumnAdapter;
use catfact_model::{GroupSpec, LevelOrder, LevelSet, Result};
use tracing::debug;

use crate::factor::Factor;
use crate::levels::{ensure_string_like, extract};

/// Collapse old levels into the groups of `groups`.
///
/// Values listed in a group become the group name. Any other non-null value
/// becomes `fallback`, or fails with
/// [`FactorError::MappingIncomplete`](catfact_model::FactorError::MappingIncomplete)
/// when no fallback is given. The new levels are the group names in
/// declaration order followed by `fallback`, which is added even when no
/// value falls back to it.
///
/// # Examples
///
/// ```
/// use catfact_model::GroupSpec;
/// use catfact_transform::collapse;
///
/// let groups = GroupSpec::new().group("x", ["a", "b"]);
/// let fct = collapse(&vec!["a", "b", "c"], Some("Z"), &groups).unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["x", "Z"]);
/// ```
pub fn collapse<C>(fct: &C, fallback: Option<&str>, groups: &GroupSpec) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    ensure_string_like(fct, "collapse")?;
    let lookup = groups.lookup("collapse")?;
    let values = fct.substitute("collapse", &lookup, fallback)?;

    let mut levels: LevelSet = groups.names().collect();
    if let Some(fallback) = fallback {
        levels.insert(fallback);
    }
    debug!(
        groups = groups.len(),
        fallback,
        levels = levels.len(),
        "collapsed levels"
    );
    Factor::encode_values(values, levels, "collapse")
}

/// Rename levels without a catch-all.
///
/// Values covered by a group take the group name; values outside every group
/// keep their own name. Level order follows the current order, each group
/// name taking the place of its first renamed level. Group names that match
/// no existing level are not added.
///
/// # Examples
///
/// ```
/// use catfact_model::GroupSpec;
/// use catfact_transform::recode;
///
/// let fct = recode(&vec!["a", "b", "c"], &GroupSpec::new().group("z", ["c"])).unwrap();
/// assert_eq!(fct.levels().to_vec(), vec!["a", "b", "z"]);
/// ```
pub fn recode<C>(fct: &C, groups: &GroupSpec) -> Result<Factor>
where
    C: ColumnAdapter + ?Sized,
{
    ensure_string_like(fct, "recode")?;
    let mut lookup = groups.lookup("recode")?;

    let current = match fct.declared_levels() {
        Some(levels) => levels,
        None => extract(fct, LevelOrder::Appearance, "recode")?,
    };
    let mut levels = LevelSet::new();
    for level in current.iter() {
        let renamed = lookup
            .entry(level.to_string())
            .or_insert_with(|| level.to_string());
        levels.insert(renamed.as_str());
    }

    // Every current level now has an entry, so substitution is total.
    let values = fct.substitute("recode", &lookup, None)?;
    debug!(
        groups = groups.len(),
        levels = levels.len(),
        "recoded levels"
    );
    Factor::encode_values(values, levels, "recode")
}
