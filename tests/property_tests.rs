mod common;

use common::test_registry;
use facetview::model::TypeLookup;
use facetview::presenter::{display_total, filter};
use facetview::{Statistic, StatisticField};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_statistic()(
        entries in proptest::collection::vec(
            (prop_oneof![
                Just("Person".to_string()),
                Just("Document".to_string()),
                Just("Folder".to_string()),
                Just("Thing".to_string()),
                "[A-Za-z]{1,8}",
            ], 0u64..10_000),
            0..30,
        )
    ) -> Statistic {
        entries.into_iter().collect()
    }
}

fn arb_other_field() -> impl Strategy<Value = StatisticField> {
    prop_oneof![
        Just(StatisticField::Countries),
        "[a-z_]{1,12}".prop_map(|s| StatisticField::from(s.as_str())),
    ]
    .prop_filter("not the schema field", |f| *f != StatisticField::Schema)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_non_schema_filter_is_identity(values in arb_statistic(), field in arb_other_field()) {
        let registry = test_registry();
        prop_assert_eq!(filter(&field, &values, &registry), values);
    }

    #[test]
    fn test_schema_filter_keeps_exactly_tangible_keys(values in arb_statistic()) {
        let registry = test_registry();
        let filtered = filter(&StatisticField::Schema, &values, &registry);

        for (key, count) in filtered.iter() {
            prop_assert_eq!(values.get(key), Some(count));
            prop_assert!(registry.is_tangible(key));
        }
        for key in values.keys() {
            if registry.is_tangible(key) {
                prop_assert!(filtered.contains(key));
            }
        }
    }

    #[test]
    fn test_schema_total_counts_surviving_keys(values in arb_statistic(), total in proptest::option::of(any::<u64>())) {
        let registry = test_registry();
        let filtered = filter(&StatisticField::Schema, &values, &registry);
        prop_assert_eq!(display_total(&StatisticField::Schema, &filtered, total), filtered.len() as u64);
    }

    #[test]
    fn test_other_total_is_reported_total(
        values in arb_statistic(),
        field in arb_other_field(),
        total in any::<u64>()
    ) {
        let registry = test_registry();
        let filtered = filter(&field, &values, &registry);
        prop_assert_eq!(display_total(&field, &filtered, Some(total)), total);
    }
}
