//! Property tests for canonicalization and range correction.

use proptest::prelude::*;
use vine_lab_core::corrector::ranges;
use vine_lab_core::{canonicalize, correct_value, TestType, CANONICAL_KEYS};

/// Mangle a key with random case and punctuation/spacing between characters.
fn mangled(key: &'static str) -> impl Strategy<Value = String> {
    let len = key.chars().count();
    (
        prop::collection::vec(any::<bool>(), len),
        prop::collection::vec(prop::sample::select(vec!["", " ", "-", "_", ".", "(", ")", "/"]), len),
    )
        .prop_map(move |(upper, seps)| {
            key.chars()
                .zip(upper)
                .zip(seps)
                .map(|((c, up), sep)| {
                    let c = if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
                    format!("{c}{sep}")
                })
                .collect()
        })
}

fn range_entry() -> impl Strategy<Value = (TestType, &'static str, f64, f64)> {
    prop::sample::select(TestType::ALL.to_vec()).prop_flat_map(|test_type| {
        prop::sample::select(ranges(test_type).to_vec()).prop_map(move |(key, range)| {
            (test_type, key, range.min, range.max)
        })
    })
}

proptest! {
    #[test]
    fn canonicalize_ignores_case_and_punctuation(
        (key, input) in prop::sample::select(CANONICAL_KEYS.to_vec())
            .prop_flat_map(|key| (Just(key), mangled(key)))
    ) {
        prop_assert_eq!(canonicalize(&input), Some(key));
    }

    #[test]
    fn in_range_values_unchanged(
        ((test_type, key, min, max), t) in (range_entry(), 0.0f64..=1.0)
    ) {
        let value = min + (max - min) * t;
        prop_assume!(value >= min && value <= max);
        prop_assert_eq!(correct_value(key, value, test_type), value);
    }

    #[test]
    fn correction_is_idempotent(
        (test_type, key, _min, _max) in range_entry(),
        value in -1.0e6f64..1.0e6,
    ) {
        let once = correct_value(key, value, test_type);
        let twice = correct_value(key, once, test_type);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unregistered_keys_pass_through(value in prop::num::f64::ANY) {
        let corrected = correct_value("cation_exchange_capacity", value, TestType::Soil);
        prop_assert!(corrected == value || (corrected.is_nan() && value.is_nan()));
    }
}
