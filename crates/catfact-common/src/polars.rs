//! Column adapters for Polars `Series`.
//!
//! String series are read directly; categorical and enum series are read
//! through a cast to `String`. Numeric and boolean series can serve as
//! companions and weights.

use catfact_model::{ElementKind, FactorError, Result};
use polars::prelude::{DataType, Series};

use crate::column::{ColumnAdapter, NumericColumn};

/// Classify a Polars data type for factor operations.
pub fn element_kind_of(dtype: &DataType) -> ElementKind {
    match dtype {
        DataType::String => ElementKind::String,
        DataType::Categorical(..) | DataType::Enum(..) => ElementKind::Categorical,
        DataType::Boolean => ElementKind::Boolean,
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => ElementKind::Numeric,
        other => ElementKind::Other(other.to_string()),
    }
}

impl ColumnAdapter for Series {
    fn length(&self) -> usize {
        self.len()
    }

    fn element_kind(&self) -> ElementKind {
        element_kind_of(self.dtype())
    }

    fn to_list(&self) -> Result<Vec<Option<String>>> {
        let strings = match self.dtype() {
            DataType::String => self.clone(),
            _ => self.cast(&DataType::String).map_err(FactorError::backend)?,
        };
        let values = strings.str().map_err(FactorError::backend)?;
        Ok(values
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect())
    }
}

impl NumericColumn for Series {
    fn length(&self) -> usize {
        self.len()
    }

    fn to_f64_values(&self, operation: &'static str) -> Result<Vec<Option<f64>>> {
        let kind = element_kind_of(self.dtype());
        if !kind.is_numeric_like() {
            return Err(FactorError::unsupported(
                operation,
                format!("a {kind} companion column '{}'", self.name()),
            ));
        }
        let floats = self
            .cast(&DataType::Float64)
            .map_err(FactorError::backend)?;
        let values = floats.f64().map_err(FactorError::backend)?;
        Ok(values.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::NamedFrom;

    #[test]
    fn string_series_round_trips_nulls() {
        let series = Series::new("x".into(), &[Some("a"), None, Some("b")]);
        assert_eq!(series.element_kind(), ElementKind::String);
        assert_eq!(
            series.to_list().unwrap(),
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn numeric_series_is_not_string_like() {
        let series = Series::new("n".into(), &[1i64, 2, 3]);
        assert_eq!(series.element_kind(), ElementKind::Numeric);
        assert!(!series.element_kind().is_string_like());
    }

    #[test]
    fn numeric_series_widens_to_f64() {
        let series = Series::new("n".into(), &[Some(1i32), None, Some(3)]);
        assert_eq!(
            series.to_f64_values("reorder").unwrap(),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn string_companion_is_unsupported() {
        let series = Series::new("s".into(), &["1", "2"]);
        let err = series.to_f64_values("reorder").unwrap_err();
        assert!(matches!(
            err,
            FactorError::Unsupported {
                operation: "reorder",
                ..
            }
        ));
    }
}
