//! Property-based tests for the forecast engine and day selector.
//!
//! These verify invariants that should hold for all valid inputs, using
//! randomly generated histories, candidate series, and targets.

use proptest::prelude::*;
use slotcast::prelude::*;

/// Strategy for a valid 8-day history with 1..=5 slots.
fn history_strategy() -> impl Strategy<Value = ImpressionHistory> {
    (1usize..=5).prop_flat_map(|slots| {
        prop::collection::vec(
            prop::collection::vec(0u64..50_000, slots),
            HISTORY_DAYS,
        )
        .prop_map(|rows| ImpressionHistory::from_rows(rows).unwrap())
    })
}

/// Strategy for a non-empty candidate series of small positive days.
fn candidates_strategy(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..1_000, 1..=max_len)
}

/// Window whose candidate positions map to days `1..=n`.
fn window_for(candidates: &[u64]) -> SchedulingWindow {
    SchedulingWindow::new(0, candidates.len() + 1).unwrap()
}

fn select(candidates: &[u64], target: i64, anchors: u64) -> SelectionOutcome {
    select_minimal_days(
        candidates,
        target,
        &window_for(candidates),
        anchors,
        SelectorConfig::default(),
    )
    .unwrap()
}

/// Brute-force reference: minimal cardinality, then minimal sum, over every
/// non-empty subset.
fn reference_best(candidates: &[u64], effective: u64) -> Option<(usize, u64)> {
    let n = candidates.len();
    let mut best: Option<(usize, u64)> = None;
    for mask in 1u32..(1 << n) {
        let cardinality = mask.count_ones() as usize;
        let sum: u64 = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| candidates[i])
            .sum();
        if sum < effective {
            continue;
        }
        let better = match best {
            None => true,
            Some((r, s)) => cardinality < r || (cardinality == r && sum < s),
        };
        if better {
            best = Some((cardinality, sum));
        }
    }
    best
}

proptest! {
    #[test]
    fn forecast_preserves_shape_and_is_deterministic(
        history in history_strategy(),
        horizon in 0usize..25,
    ) {
        let config = ForecastConfig::with_horizon(horizon);
        let first = forecast(&history, config).unwrap();
        let second = forecast(&history, config).unwrap();

        prop_assert_eq!(first.horizon(), horizon);
        prop_assert_eq!(first.slots(), history.slots());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selection_matches_brute_force(
        candidates in candidates_strategy(10),
        target_seed in 0u64..10_000,
    ) {
        let total: u64 = candidates.iter().sum();
        let effective = 1 + target_seed % total;

        let outcome = select(&candidates, effective as i64, 0);
        match reference_best(&candidates, effective) {
            Some((cardinality, sum)) => {
                let selection = outcome.selection().unwrap();
                prop_assert_eq!(selection.cardinality, cardinality);
                prop_assert_eq!(selection.achieved_total, sum);
                prop_assert!(selection.achieved_total >= effective);
            }
            None => prop_assert!(!outcome.is_satisfied()),
        }
    }

    #[test]
    fn lowering_the_target_never_raises_cardinality(
        candidates in candidates_strategy(8),
        seed_a in 0u64..1_000_000,
        seed_b in 0u64..1_000_000,
    ) {
        let total: u64 = candidates.iter().sum();
        let high = 1 + seed_a % total;
        let low = seed_b % high;

        let demanding = select(&candidates, high as i64, 0);
        let generous = select(&candidates, low as i64, 0);

        let high_days = demanding.selection().unwrap().cardinality;
        let low_days = generous.selection().unwrap().cardinality;
        prop_assert!(low_days <= high_days);
    }

    #[test]
    fn anchors_at_or_above_target_short_circuit(
        candidates in candidates_strategy(8),
        target in 0i64..100_000,
        surplus in 0u64..5_000,
    ) {
        let anchors = target as u64 + surplus;
        let outcome = select(&candidates, target, anchors);

        let selection = outcome.selection().unwrap();
        prop_assert_eq!(selection.cardinality, 0);
        prop_assert_eq!(selection.achieved_total, anchors);
        prop_assert_eq!(selection.chosen_days.len(), 2);
    }

    #[test]
    fn targets_beyond_every_candidate_are_infeasible(
        candidates in candidates_strategy(8),
        anchors in 0u64..1_000,
        excess in 1u64..1_000,
    ) {
        let total: u64 = candidates.iter().sum();
        let target = (anchors + total + excess) as i64;

        let outcome = select(&candidates, target, anchors);
        prop_assert_eq!(
            outcome,
            SelectionOutcome::Infeasible { max_attainable: anchors + total }
        );
    }

    #[test]
    fn exact_total_requires_every_candidate(
        candidates in candidates_strategy(8),
    ) {
        let total: u64 = candidates.iter().sum();
        let outcome = select(&candidates, total as i64, 0);

        let selection = outcome.selection().unwrap();
        prop_assert_eq!(selection.cardinality, candidates.len());
        prop_assert_eq!(selection.achieved_total, total);
    }
}
