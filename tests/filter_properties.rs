//! Property-based invariant tests for the resolution filter.
//!
//! Verifies:
//! 1. resolution = 1.0 is the identity for any series
//! 2. series of length ≤ 2 pass through untouched at any resolution
//! 3. the first and last entries survive every resolution value
//! 4. the output is never longer than the input and preserves order
//! 5. strictly monotonic series reduce to their endpoints at resolution 0

use line_graph::{Entry, filter_by_resolution};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((-1.0e6f64..1.0e6, -1.0e6f64..1.0e6), 0..max_len)
        .prop_map(|points| points.into_iter().map(|(x, y)| Entry::new(x, y)).collect())
}

fn arb_resolution() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn full_resolution_is_identity(series in arb_series(64)) {
        prop_assert_eq!(filter_by_resolution(&series, 1.0), series);
    }

    #[test]
    fn short_series_are_identity(series in arb_series(3), resolution in arb_resolution()) {
        prop_assume!(series.len() <= 2);
        prop_assert_eq!(filter_by_resolution(&series, resolution), series);
    }

    #[test]
    fn endpoints_always_survive(series in arb_series(64), resolution in arb_resolution()) {
        prop_assume!(!series.is_empty());
        let filtered = filter_by_resolution(&series, resolution);
        prop_assert_eq!(filtered.first(), series.first());
        prop_assert_eq!(filtered.last(), series.last());
    }

    #[test]
    fn output_is_an_ordered_subsequence(series in arb_series(64), resolution in arb_resolution()) {
        let filtered = filter_by_resolution(&series, resolution);
        prop_assert!(filtered.len() <= series.len());

        // every filtered entry appears in the input, in the same order
        let mut cursor = series.iter();
        for kept in &filtered {
            prop_assert!(cursor.any(|e| e == kept));
        }
    }

    #[test]
    fn monotonic_series_collapse_to_endpoints(len in 3usize..40) {
        let series: Vec<Entry> = (0..len)
            .map(|i| Entry::new(i as f64, i as f64))
            .collect();
        let filtered = filter_by_resolution(&series, 0.0);
        prop_assert_eq!(filtered, vec![series[0], series[len - 1]]);
    }
}
