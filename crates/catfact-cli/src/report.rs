//! Level summaries of a factor, for display or JSON output.

use catfact_transform::Factor;
use serde::Serialize;

/// One level and the rows that hold it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelRow {
    pub level: String,
    pub count: usize,
    /// Fraction of non-null rows, 0 when there are none.
    pub share: f64,
}

/// Levels of a factor in level order, with null and row totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelReport {
    pub column: String,
    pub operation: String,
    pub rows: usize,
    pub nulls: usize,
    pub levels: Vec<LevelRow>,
}

impl LevelReport {
    pub fn from_factor(column: &str, operation: &str, factor: &Factor) -> Self {
        let nulls = factor.null_count();
        let non_null = factor.len() - nulls;
        let levels = factor
            .level_counts()
            .into_iter()
            .map(|(level, count)| LevelRow {
                level: level.to_string(),
                count,
                share: if non_null == 0 {
                    0.0
                } else {
                    count as f64 / non_null as f64
                },
            })
            .collect();
        Self {
            column: column.to_string(),
            operation: operation.to_string(),
            rows: factor.len(),
            nulls,
            levels,
        }
    }

    pub fn level_names(&self) -> Vec<&str> {
        self.levels.iter().map(|row| row.level.as_str()).collect()
    }
}
