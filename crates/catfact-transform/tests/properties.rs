//! Property tests for level invariants.

use std::collections::{HashMap, HashSet};

use catfact_model::{GroupSpec, LumpOptions, ReorderOptions};
use catfact_transform::{collapse, factor, infreq, inseq, lump_n, recode, reorder};
use proptest::prelude::*;

/// Short values from a small alphabet so repeats and ties are common.
fn arb_column() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::weighted(0.85, "[a-f]{1,2}"), 0..40)
}

fn counts(column: &[Option<String>]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for value in column.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    counts
}

fn first_seen(column: &[Option<String>], level: &str) -> usize {
    column
        .iter()
        .position(|value| value.as_deref() == Some(level))
        .unwrap_or(usize::MAX)
}

proptest! {
    #[test]
    fn test_factor_levels_are_the_distinct_values(column in arb_column()) {
        let fct = factor(&column).unwrap();
        let distinct: HashSet<&str> = column.iter().flatten().map(String::as_str).collect();
        let levels: HashSet<&str> = fct.levels().iter().collect();

        prop_assert_eq!(levels, distinct);
        prop_assert_eq!(fct.len(), column.len());
        for (value, encoded) in column.iter().zip(fct.values()) {
            prop_assert_eq!(value.as_deref(), encoded);
        }
    }

    #[test]
    fn test_infreq_counts_never_increase(column in arb_column()) {
        let fct = infreq(&column, None).unwrap();
        let counts = counts(&column);
        let levels = fct.levels().to_vec();
        for pair in levels.windows(2) {
            let (a, b) = (counts[pair[0].as_str()], counts[pair[1].as_str()]);
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(first_seen(&column, &pair[0]) < first_seen(&column, &pair[1]));
            }
        }
    }

    #[test]
    fn test_inseq_is_sorted(column in arb_column()) {
        let fct = inseq(&column).unwrap();
        let mut expected: Vec<String> = fct.levels().to_vec();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(fct.levels().to_vec(), expected);
    }

    #[test]
    fn test_reorder_statistics_are_non_decreasing(
        (column, companion) in arb_column().prop_flat_map(|column| {
            let len = column.len();
            (Just(column), proptest::collection::vec(proptest::option::of(-100.0f64..100.0), len))
        })
    ) {
        let fct = reorder(&column, &companion, &ReorderOptions::default()).unwrap();

        let mut groups: HashMap<&str, Vec<f64>> = HashMap::new();
        for (value, stat) in column.iter().zip(&companion) {
            if let Some(value) = value {
                let group = groups.entry(value.as_str()).or_default();
                if let Some(stat) = stat {
                    group.push(*stat);
                }
            }
        }
        let stats: Vec<Option<f64>> = fct
            .levels()
            .iter()
            .map(|level| catfact_model::options::median(&groups[level]))
            .collect();

        let defined = stats.iter().take_while(|stat| stat.is_some()).count();
        prop_assert!(stats[defined..].iter().all(Option::is_none));
        for pair in stats[..defined].windows(2) {
            prop_assert!(pair[0].unwrap() <= pair[1].unwrap());
        }
    }

    #[test]
    fn test_collapse_maps_every_value_to_group_or_fallback(column in arb_column()) {
        let groups = GroupSpec::new().group("first", ["a", "b"]).group("second", ["c"]);
        let fct = collapse(&column, Some("rest"), &groups).unwrap();
        let lookup = groups.lookup("collapse").unwrap();

        for (value, encoded) in column.iter().zip(fct.values()) {
            match value {
                None => prop_assert_eq!(encoded, None),
                Some(value) => {
                    let expected = lookup.get(value).map_or("rest", String::as_str);
                    prop_assert_eq!(encoded, Some(expected));
                }
            }
        }
    }

    #[test]
    fn test_identity_recode_preserves_membership(column in arb_column()) {
        let mut groups = GroupSpec::new();
        for level in factor(&column).unwrap().levels().iter() {
            groups.push(level, [level]);
        }
        let base = factor(&column).unwrap();
        let fct = recode(&column, &groups).unwrap();
        prop_assert_eq!(fct, base);
    }

    #[test]
    fn test_collapse_identity_preserves_membership(column in arb_column()) {
        let mut groups = GroupSpec::new();
        for level in factor(&column).unwrap().levels().iter() {
            groups.push(level, [level]);
        }
        let base = factor(&column).unwrap();
        let fct = collapse(&column, None, &groups).unwrap();
        prop_assert_eq!(fct, base);
    }

    #[test]
    fn test_lump_with_large_n_is_frequency_order(column in arb_column()) {
        let full = infreq(&column, None).unwrap();
        let n = full.levels().len();
        let fct = lump_n(&column, &LumpOptions::new(n), None).unwrap();

        prop_assert_eq!(fct.levels(), full.levels());
        prop_assert!(!fct.levels().contains("Other"));
    }
}
