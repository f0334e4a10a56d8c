#![forbid(unsafe_code)]

//! Derived per-category views of a poll set.
//!
//! Pure reads: filter by category, then a stable ascending sort by order
//! key. Equal keys should not occur (the engine re-indexes after every
//! mutation) but are tolerated; the stable sort falls back to the
//! deterministic `BTreeMap` iteration order instead of panicking.

use crate::poll::{CategoryId, Poll, PollId, PollSet};

/// Polls in `category`, sorted ascending by order key.
#[must_use]
pub fn polls_in_category<'a>(polls: &'a PollSet, category: &CategoryId) -> Vec<&'a Poll> {
    let mut list: Vec<&Poll> = polls
        .values()
        .filter(|poll| &poll.category == category)
        .collect();
    list.sort_by(|a, b| a.order.total_cmp(&b.order));
    list
}

/// Ids in `category`, sorted ascending by order key.
#[must_use]
pub fn sorted_ids(polls: &PollSet, category: &CategoryId) -> Vec<PollId> {
    polls_in_category(polls, category)
        .into_iter()
        .map(|poll| poll.id.clone())
        .collect()
}

/// Zero-based position of `id` within its own category, if present.
#[must_use]
pub fn position_of(polls: &PollSet, id: &PollId) -> Option<usize> {
    let poll = polls.get(id)?;
    polls_in_category(polls, &poll.category)
        .iter()
        .position(|sibling| &sibling.id == id)
}

/// Number of polls in `category`.
#[must_use]
pub fn category_count(polls: &PollSet, category: &CategoryId) -> usize {
    polls
        .values()
        .filter(|poll| &poll.category == category)
        .count()
}
