//! Ordered, duplicate-free level sets.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{FactorError, Result};

/// The ordered set of allowed non-null values of a factor.
///
/// Order is meaningful: it is the display and sort order of the factor.
/// A level set never contains the same level twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LevelSet {
    levels: IndexSet<String>,
}

impl LevelSet {
    /// Create an empty level set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a level set from a list, rejecting duplicates.
    pub fn try_from_vec(levels: Vec<String>) -> Result<Self> {
        Self::distinct_from_vec(levels, "try_from_vec")
    }

    fn distinct_from_vec(levels: Vec<String>, operation: &'static str) -> Result<Self> {
        let mut set = IndexSet::with_capacity(levels.len());
        for level in levels {
            if set.contains(&level) {
                return Err(FactorError::DuplicateLevel { operation, level });
            }
            set.insert(level);
        }
        Ok(Self { levels: set })
    }

    /// Append a level unless it is already present.
    ///
    /// Returns true when the level was added.
    pub fn insert(&mut self, level: impl Into<String>) -> bool {
        self.levels.insert(level.into())
    }

    pub fn contains(&self, level: &str) -> bool {
        self.levels.contains(level)
    }

    /// Position of a level in the set, which is its code in a factor.
    pub fn position(&self, level: &str) -> Option<usize> {
        self.levels.get_index_of(level)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.levels.get_index(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(String::as_str)
    }

    /// Copy of this set sorted ascending by string comparison.
    pub fn sorted(&self) -> Self {
        let mut levels = self.levels.clone();
        levels.sort();
        Self { levels }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.levels.iter().cloned().collect()
    }
}

impl TryFrom<Vec<String>> for LevelSet {
    type Error = FactorError;

    fn try_from(levels: Vec<String>) -> Result<Self> {
        Self::distinct_from_vec(levels, "deserialize")
    }
}

impl From<LevelSet> for Vec<String> {
    fn from(levels: LevelSet) -> Self {
        levels.levels.into_iter().collect()
    }
}

/// Collects levels in order, keeping the first occurrence of each.
impl<S: Into<String>> FromIterator<S> for LevelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut levels = Self::new();
        for level in iter {
            levels.insert(level);
        }
        levels
    }
}

impl<'a> IntoIterator for &'a LevelSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
