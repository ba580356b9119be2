//! Renaming and collapsing plans.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FactorError, Result};

/// One new level and the old levels folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// New level name.
    pub name: String,
    /// Old level names mapped onto `name`.
    pub levels: Vec<String>,
}

/// An ordered list of `(new_name, old_names)` pairs.
///
/// Declaration order is the order new levels appear in a collapsed factor.
///
/// # Examples
///
/// ```
/// use catfact_model::GroupSpec;
///
/// let groups = GroupSpec::new()
///     .group("vowel", ["a", "e"])
///     .group("other", ["b"]);
/// assert_eq!(groups.names().collect::<Vec<_>>(), vec!["vowel", "other"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Group>", into = "Vec<Group>")]
pub struct GroupSpec {
    groups: Vec<Group>,
}

impl GroupSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group. A name that is already declared is extended in place.
    #[must_use]
    pub fn group<I, S>(mut self, name: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(name, levels);
        self
    }

    /// Add a group in place. See [`GroupSpec::group`].
    pub fn push<I, S>(&mut self, name: impl Into<String>, levels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        match self.groups.iter_mut().find(|group| group.name == name) {
            Some(existing) => existing.levels.extend(levels),
            None => self.groups.push(Group { name, levels }),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// New level names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flip the plan into an old -> new lookup.
    ///
    /// An old level listed under two different groups is rejected; listing
    /// it twice under the same group is harmless.
    pub fn lookup(&self, operation: &'static str) -> Result<IndexMap<String, String>> {
        let mut lookup: IndexMap<String, String> = IndexMap::new();
        for group in &self.groups {
            for old in &group.levels {
                match lookup.get(old) {
                    Some(first) if *first != group.name => {
                        return Err(FactorError::DuplicateAssignment {
                            operation,
                            level: old.clone(),
                            first: first.clone(),
                            second: group.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        lookup.insert(old.clone(), group.name.clone());
                    }
                }
            }
        }
        Ok(lookup)
    }
}

impl From<Vec<Group>> for GroupSpec {
    fn from(groups: Vec<Group>) -> Self {
        let mut spec = Self::new();
        for group in groups {
            spec.push(group.name, group.levels);
        }
        spec
    }
}

impl From<GroupSpec> for Vec<Group> {
    fn from(spec: GroupSpec) -> Self {
        spec.groups
    }
}
