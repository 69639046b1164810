//! Minimal-day subset selection against an impression target.

use crate::error::{Result, ScheduleError};
use crate::scheduling::SchedulingWindow;

/// The chosen days for one (window, target) query.
///
/// Computed once per query and not mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Number of chosen days beyond the two anchors.
    pub cardinality: usize,
    /// All scheduled day indices, anchors included, ascending.
    pub chosen_days: Vec<usize>,
    /// Impressions over `chosen_days`, anchor contribution included.
    pub achieved_total: u64,
}

/// Outcome of a day-selection query.
///
/// Infeasibility is an expected result, not an error; callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The target is reachable; the minimal selection is attached.
    Satisfied(Selection),
    /// Even scheduling every candidate day cannot reach the target.
    Infeasible {
        /// Anchors plus every candidate day.
        max_attainable: u64,
    },
}

impl SelectionOutcome {
    /// Check whether the target was reached.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied(_))
    }

    /// The selection, if the target was reached.
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Self::Satisfied(selection) => Some(selection),
            Self::Infeasible { .. } => None,
        }
    }
}

/// Limits for the subset search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Stop with [`ScheduleError::SearchBudgetExceeded`] after evaluating
    /// this many subsets. `None` searches exhaustively; the enumeration is
    /// exponential in the candidate count, so callers with wide windows
    /// should set a budget.
    pub max_subsets: Option<u64>,
}

/// Pick the fewest candidate days whose impressions close the gap to the
/// target, after crediting the anchors.
///
/// `candidates` holds the impressions of the days strictly between the
/// window's anchors, in day order. The search ascends through subset
/// cardinalities; at the first cardinality with a qualifying subset (sum >=
/// effective target) it returns the qualifier with the smallest sum, ties
/// resolved to the lexicographically first subset so that sequential and
/// partitioned enumerations agree.
pub fn select_minimal_days(
    candidates: &[u64],
    target: i64,
    window: &SchedulingWindow,
    anchor_impressions: u64,
    config: SelectorConfig,
) -> Result<SelectionOutcome> {
    if candidates.len() != window.candidate_count() {
        return Err(ScheduleError::DimensionMismatch {
            expected: window.candidate_count(),
            got: candidates.len(),
        });
    }

    // The anchors alone may already satisfy the goal.
    let effective = target - anchor_impressions as i64;
    if effective <= 0 {
        return Ok(SelectionOutcome::Satisfied(Selection {
            cardinality: 0,
            chosen_days: vec![window.start_day(), window.end_day()],
            achieved_total: anchor_impressions,
        }));
    }
    let effective = effective as u64;

    let total: u64 = candidates.iter().sum();
    if total < effective {
        return Ok(SelectionOutcome::Infeasible {
            max_attainable: anchor_impressions + total,
        });
    }

    let n = candidates.len();
    let mut explored: u64 = 0;

    for r in 1..=n {
        let mut best: Option<(u64, Vec<usize>)> = None;
        let mut combo: Vec<usize> = (0..r).collect();

        loop {
            explored += 1;
            if let Some(budget) = config.max_subsets {
                if explored > budget {
                    return Err(ScheduleError::SearchBudgetExceeded { explored });
                }
            }

            let sum: u64 = combo.iter().map(|&i| candidates[i]).sum();
            // Strict comparison keeps the lexicographically first subset on
            // equal sums.
            if sum >= effective && best.as_ref().map_or(true, |(s, _)| sum < *s) {
                best = Some((sum, combo.clone()));
            }

            if !advance_combination(&mut combo, n) {
                break;
            }
        }

        if let Some((sum, subset)) = best {
            let cardinality = subset.len();
            let mut chosen_days: Vec<usize> = subset
                .into_iter()
                .map(|position| window.candidate_day(position))
                .collect();
            chosen_days.push(window.start_day());
            chosen_days.push(window.end_day());
            chosen_days.sort_unstable();

            return Ok(SelectionOutcome::Satisfied(Selection {
                cardinality,
                chosen_days,
                achieved_total: anchor_impressions + sum,
            }));
        }
    }

    // total >= effective guarantees the full candidate set qualified at
    // r = n, so this point is unreachable for n > 0; n == 0 was handled by
    // the total check above.
    Ok(SelectionOutcome::Infeasible {
        max_attainable: anchor_impressions + total,
    })
}

/// Step `combo` to the next size-`r` combination of `0..n` in lexicographic
/// order. Returns false once the last combination has been visited.
fn advance_combination(combo: &mut [usize], n: usize) -> bool {
    let r = combo.len();
    let mut i = r;
    while i > 0 {
        i -= 1;
        if combo[i] != i + n - r {
            combo[i] += 1;
            for j in i + 1..r {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
