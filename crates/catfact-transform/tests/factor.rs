//! Tests for factor construction and level extraction.

use catfact_model::{FactorError, LevelSet};
use catfact_transform::{cats, factor, factor_with_levels, infreq, inorder, inseq, to_list};

#[test]
fn test_factor_levels_follow_first_appearance() {
    let fct = factor(&vec![Some("b"), None, Some("a"), Some("b")]).unwrap();

    assert_eq!(cats(&fct).to_vec(), vec!["b", "a"]);
    assert_eq!(fct.codes(), &[Some(0), None, Some(1), Some(0)]);
    assert_eq!(fct.null_count(), 1);
}

#[test]
fn test_inorder_matches_factor() {
    let raw = vec!["z", "x", "z", "y"];
    assert_eq!(inorder(&raw, None).unwrap(), factor(&raw).unwrap());
}

#[test]
fn test_infreq_orders_by_count() {
    // counts: c=3, a=2, b=1
    let fct = infreq(&vec!["c", "a", "c", "c", "a", "b"], None).unwrap();

    assert_eq!(fct.levels().to_vec(), vec!["c", "a", "b"]);
    assert_eq!(fct.level_counts(), vec![("c", 3), ("a", 2), ("b", 1)]);
}

#[test]
fn test_inseq_sorts_lexically() {
    let fct = inseq(&vec!["b", "c", "a", "b"]).unwrap();
    assert_eq!(fct.levels().to_vec(), vec!["a", "b", "c"]);
    assert_eq!(
        to_list(&fct).unwrap(),
        vec![
            Some("b".to_string()),
            Some("c".to_string()),
            Some("a".to_string()),
            Some("b".to_string())
        ]
    );
}

#[test]
fn test_factor_with_levels_keeps_unused_levels() {
    let levels = LevelSet::try_from_vec(vec!["lo".into(), "mid".into(), "hi".into()]).unwrap();
    let fct = factor_with_levels(&vec!["hi", "lo"], levels).unwrap();

    assert_eq!(fct.levels().to_vec(), vec!["lo", "mid", "hi"]);
    assert_eq!(fct.codes(), &[Some(2), Some(0)]);
}

#[test]
fn test_factor_with_levels_rejects_outside_value() {
    let levels: LevelSet = ["lo"].into_iter().collect();
    let err = factor_with_levels(&vec!["lo", "hi"], levels).unwrap_err();
    assert_eq!(
        err,
        FactorError::UnknownLevel {
            operation: "factor_with_levels",
            value: "hi".to_string(),
            row: 1
        }
    );
}

#[test]
fn test_refactoring_a_factor_is_stable() {
    let fct = infreq(&vec!["b", "a", "a"], None).unwrap();
    let again = infreq(&fct, None).unwrap();
    assert_eq!(again, fct);
}

#[cfg(feature = "polars")]
mod polars_backend {
    use catfact_model::FactorError;
    use catfact_transform::{factor, infreq, inseq};
    use polars::prelude::*;

    #[test]
    fn test_factor_from_string_series() {
        let series = Series::new("x".into(), &[Some("c"), Some("a"), None, Some("c")]);
        let fct = infreq(&series, None).unwrap();

        assert_eq!(fct.levels().to_vec(), vec!["c", "a"]);
        assert_eq!(fct.codes(), &[Some(0), Some(1), None, Some(0)]);
    }

    #[test]
    fn test_numeric_series_is_a_type_error() {
        let series = Series::new("n".into(), &[1i64, 2, 1]);
        let err = factor(&series).unwrap_err();
        assert!(matches!(
            err,
            FactorError::TypeKind {
                operation: "factor",
                ..
            }
        ));
        assert!(inseq(&series).is_err());
    }

    #[test]
    fn test_factor_to_series_round_trip() {
        let fct = factor(&vec![Some("a"), None, Some("b")]).unwrap();
        let series = fct.to_series("grade");

        assert_eq!(series.name().as_str(), "grade");
        assert_eq!(series.null_count(), 1);
        let values: Vec<Option<&str>> = series.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("a"), None, Some("b")]);
    }
}
