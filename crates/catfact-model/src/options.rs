//! Configuration options for level transforms.

use serde::{Deserialize, Serialize};

/// Policy for deriving level order from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelOrder {
    /// Order of first occurrence.
    #[default]
    Appearance,
    /// Most frequent first; ties keep first-occurrence order.
    Frequency,
    /// Ascending string comparison.
    Lexical,
}

/// Named reductions used to summarise companion values per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Median,
    Mean,
    Min,
    Max,
    Sum,
    Count,
    First,
    Last,
}

impl Aggregation {
    /// Reduce the non-null values of one level.
    ///
    /// Returns `None` when the statistic is undefined, which is the case for
    /// every reduction except `Sum` and `Count` on an empty slice.
    pub fn reduce(self, values: &[f64]) -> Option<f64> {
        match self {
            Aggregation::Median => median(values),
            Aggregation::Mean => {
                if values.is_empty() {
                    None
                } else {
                    Some(values.iter().sum::<f64>() / values.len() as f64)
                }
            }
            Aggregation::Min => values.iter().copied().reduce(f64::min),
            Aggregation::Max => values.iter().copied().reduce(f64::max),
            Aggregation::Sum => Some(values.iter().sum()),
            Aggregation::Count => Some(values.len() as f64),
            Aggregation::First => values.first().copied(),
            Aggregation::Last => values.last().copied(),
        }
    }
}

/// Median with the midpoint of the two central values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Options for reordering levels by a companion statistic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderOptions {
    /// Reduction applied per level. Default: median.
    pub aggregation: Aggregation,
    /// Sort the statistic descending instead of ascending.
    /// Undefined statistics go last either way.
    pub descending: bool,
}

impl ReorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    #[must_use]
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }
}

/// Default number of levels kept by lumping.
pub const DEFAULT_LUMP_N: usize = 5;

/// Default name of the catch-all level.
pub const DEFAULT_FALLBACK: &str = "Other";

/// Options for lumping infrequent levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumpOptions {
    /// Number of most frequent levels that keep their own name.
    pub n: usize,
    /// Level that receives everything ranked below `n`.
    pub fallback: String,
}

impl Default for LumpOptions {
    fn default() -> Self {
        Self {
            n: DEFAULT_LUMP_N,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl LumpOptions {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}
