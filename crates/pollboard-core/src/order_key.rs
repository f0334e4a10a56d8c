#![forbid(unsafe_code)]

//! Order-key allocation.
//!
//! Keys are floating-point, spaced [`ORDER_STEP`] apart when healthy, so a
//! single insertion usually resolves with midpoint math instead of a full
//! rewrite of the category. Every mutating engine operation finishes by
//! re-indexing the affected categories back to dense multiples of
//! `ORDER_STEP`, which bounds how far midpoint keys can drift between two
//! neighbors.
//!
//! # Invariants
//! 1. `append` returns a key strictly greater than every existing key
//!    (assuming keys are non-negative, which re-indexing guarantees).
//! 2. `midpoint(Some(b), Some(a))` with `b < a` lies strictly between them
//!    for any interactively plausible key gap.
//! 3. `reindex` preserves the relative sequence of its input and is
//!    idempotent.

use crate::poll::Poll;

/// Gap between sibling keys after a re-index.
pub const ORDER_STEP: f64 = 10.0;

/// Next key for appending to a category with the given existing keys.
///
/// `max(existing, default 0) + ORDER_STEP`; an empty category yields
/// `ORDER_STEP`.
#[must_use]
pub fn append(existing: &[f64]) -> f64 {
    existing.iter().copied().fold(0.0_f64, f64::max) + ORDER_STEP
}

/// Key for inserting between two optional neighbors.
///
/// - both present: their arithmetic mean;
/// - head insertion (`before` absent): half of `after`, i.e. the mean with
///   a virtual predecessor of 0;
/// - tail insertion (`after` absent): `before + ORDER_STEP`;
/// - empty category: `ORDER_STEP`.
#[must_use]
pub fn midpoint(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(b), Some(a)) => (b + a) / 2.0,
        (None, Some(a)) => a / 2.0,
        (Some(b), None) => b + ORDER_STEP,
        (None, None) => ORDER_STEP,
    }
}

/// The dense key for position `index` within a re-indexed category.
#[inline]
#[must_use]
pub fn reindexed_key(index: usize) -> f64 {
    (index as f64 + 1.0) * ORDER_STEP
}

/// Stamp dense keys `10, 20, 30, ...` over `items` in their given sequence.
pub fn reindex(items: &mut [Poll]) {
    for (index, poll) in items.iter_mut().enumerate() {
        poll.order = reindexed_key(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::{CategoryId, PollId};

    fn poll(id: &str, order: f64) -> Poll {
        Poll {
            id: PollId::from(id),
            category: CategoryId::from("ZERG"),
            description: String::new(),
            options: Vec::new(),
            tags: Vec::new(),
            thread_title: None,
            order,
        }
    }

    #[test]
    fn append_to_empty_is_one_step() {
        assert_eq!(append(&[]), 10.0);
    }

    #[test]
    fn append_steps_past_max() {
        assert_eq!(append(&[10.0]), 20.0);
        assert_eq!(append(&[30.0, 10.0, 20.0]), 40.0);
    }

    #[test]
    fn append_ignores_negative_keys() {
        // Defaults to 0 as the floor, like the original max(..., 0).
        assert_eq!(append(&[-50.0]), 10.0);
    }

    #[test]
    fn append_handles_fractional_max() {
        assert_eq!(append(&[10.0, 15.0]), 25.0);
    }

    #[test]
    fn midpoint_between_neighbors() {
        assert_eq!(midpoint(Some(10.0), Some(20.0)), 15.0);
    }

    #[test]
    fn midpoint_at_head_halves_successor() {
        assert_eq!(midpoint(None, Some(10.0)), 5.0);
    }

    #[test]
    fn midpoint_at_tail_appends() {
        assert_eq!(midpoint(Some(30.0), None), 40.0);
    }

    #[test]
    fn midpoint_in_empty_category() {
        assert_eq!(midpoint(None, None), 10.0);
    }

    #[test]
    fn reindex_stamps_dense_keys() {
        let mut items = vec![poll("a", 7.5), poll("b", 12.0), poll("c", 12.0)];
        reindex(&mut items);
        let keys: Vec<f64> = items.iter().map(|p| p.order).collect();
        assert_eq!(keys, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn reindex_is_idempotent() {
        let mut items = vec![poll("a", 3.0), poll("b", 99.0)];
        reindex(&mut items);
        let first: Vec<f64> = items.iter().map(|p| p.order).collect();
        reindex(&mut items);
        let second: Vec<f64> = items.iter().map(|p| p.order).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_midpoints_stay_ordered() {
        // Tens of insertions between the same neighbors without a re-index
        // must keep strict ordering (accepted precision envelope).
        let mut lo = 10.0;
        let hi = 20.0;
        for _ in 0..50 {
            let mid = midpoint(Some(lo), Some(hi));
            assert!(lo < mid && mid < hi);
            lo = mid;
        }
    }
}
