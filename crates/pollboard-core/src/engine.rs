#![forbid(unsafe_code)]

//! The reorder engine: the sole authority for `(category, order)` changes.
//!
//! Every operation takes the current [`PollSet`] snapshot and returns a new
//! one; the caller replaces its copy of truth before dispatching the next
//! operation. A referenced poll id that is absent at call time makes the
//! operation a no-op returning the input unchanged (the UI can lag the
//! collection, e.g. a delete landing mid-drag).
//!
//! # Invariants
//! 1. After any operation here, no two polls in the same category share an
//!    order key: the destination category is always re-indexed, and the
//!    source category too when a poll crossed categories.
//! 2. `move_poll` never adds or removes ids.
//! 3. `duplicate_insert_after` adds exactly one id, placed immediately
//!    after its source in the source's category.

use crate::category_index;
use crate::order_key;
use crate::poll::{CategoryId, Poll, PollDraft, PollId, PollSet};

/// Re-stamp a category's keys to dense multiples of the step, in key order.
pub(crate) fn reindex_category(polls: &mut PollSet, category: &CategoryId) {
    let ids = category_index::sorted_ids(polls, category);
    for (index, id) in ids.iter().enumerate() {
        if let Some(poll) = polls.get_mut(id) {
            poll.order = order_key::reindexed_key(index);
        }
    }
}

/// Place `id` into `target_category` at `target_order`, then re-index the
/// destination (and the source, if different).
///
/// `target_order` is typically a midpoint key from a drop placeholder; the
/// re-index immediately replaces it with a dense key at the same sorted
/// position.
#[must_use]
pub fn move_poll(
    polls: &PollSet,
    id: &PollId,
    target_category: &CategoryId,
    target_order: f64,
) -> PollSet {
    let Some(existing) = polls.get(id) else {
        return polls.clone();
    };
    let source_category = existing.category.clone();

    let mut next = polls.clone();
    if let Some(poll) = next.get_mut(id) {
        poll.category = target_category.clone();
        poll.order = target_order;
    }
    reindex_category(&mut next, target_category);
    if source_category != *target_category {
        reindex_category(&mut next, &source_category);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        poll = %id,
        from = %source_category,
        to = %target_category,
        "poll moved"
    );

    next
}

/// Duplicate `id` with a fresh identifier, placed immediately after the
/// source in its category, then re-index that category.
///
/// Returns the new set and the duplicate's id, or `None` when the source
/// was absent.
#[must_use]
pub fn duplicate_insert_after(polls: &PollSet, id: &PollId) -> (PollSet, Option<PollId>) {
    let Some(source) = polls.get(id) else {
        return (polls.clone(), None);
    };

    let mut ids = category_index::sorted_ids(polls, &source.category);
    let Some(source_index) = ids.iter().position(|i| i == id) else {
        return (polls.clone(), None);
    };

    let new_id = PollId::generate();
    let mut copy = source.clone();
    copy.id = new_id.clone();

    let mut next = polls.clone();
    next.insert(new_id.clone(), copy);
    ids.insert(source_index + 1, new_id.clone());
    for (index, pid) in ids.iter().enumerate() {
        if let Some(poll) = next.get_mut(pid) {
            poll.order = order_key::reindexed_key(index);
        }
    }

    (next, Some(new_id))
}

/// Replace a category's entire arrangement with `ordered_ids`.
///
/// Each listed poll gets `category` and the dense key for its position;
/// unknown ids are skipped. Doubles as the cross-category drop finalizer
/// when the full target list is known at drop time.
#[must_use]
pub fn bulk_set_order(polls: &PollSet, category: &CategoryId, ordered_ids: &[PollId]) -> PollSet {
    let mut next = polls.clone();
    for (index, id) in ordered_ids.iter().enumerate() {
        if let Some(poll) = next.get_mut(id) {
            poll.category = category.clone();
            poll.order = order_key::reindexed_key(index);
        }
    }
    next
}

/// Create a poll from `draft` with a fresh id and an appended order key.
#[must_use]
pub fn create_poll(polls: &PollSet, draft: PollDraft) -> (PollSet, PollId) {
    let existing: Vec<f64> = polls
        .values()
        .filter(|poll| poll.category == draft.category)
        .map(|poll| poll.order)
        .collect();
    let id = PollId::generate();
    let poll = Poll {
        id: id.clone(),
        category: draft.category,
        description: draft.description,
        options: draft.options,
        tags: draft.tags,
        thread_title: draft.thread_title,
        order: order_key::append(&existing),
    };

    let mut next = polls.clone();
    next.insert(id.clone(), poll);
    (next, id)
}

/// Replace the content fields of `id` with `draft`.
///
/// The order key survives unless the draft moves the poll to another
/// category, in which case both categories are re-indexed.
#[must_use]
pub fn update_poll(polls: &PollSet, id: &PollId, draft: PollDraft) -> PollSet {
    let Some(existing) = polls.get(id) else {
        return polls.clone();
    };
    let old_category = existing.category.clone();
    let category_changed = old_category != draft.category;

    let mut next = polls.clone();
    if let Some(poll) = next.get_mut(id) {
        poll.category = draft.category.clone();
        poll.description = draft.description;
        poll.options = draft.options;
        poll.tags = draft.tags;
        poll.thread_title = draft.thread_title;
    }
    if category_changed {
        reindex_category(&mut next, &old_category);
        reindex_category(&mut next, &draft.category);
    }
    next
}

/// Remove `id`, returning the removed snapshot for undo.
///
/// Siblings keep their keys; the gap left behind is harmless and closes on
/// the next re-index of that category.
#[must_use]
pub fn remove_poll(polls: &PollSet, id: &PollId) -> (PollSet, Option<Poll>) {
    let mut next = polls.clone();
    let removed = next.remove(id);
    (next, removed)
}

/// Reinsert a previously removed poll unchanged (undo of [`remove_poll`]).
#[must_use]
pub fn restore_poll(polls: &PollSet, poll: Poll) -> PollSet {
    let mut next = polls.clone();
    next.insert(poll.id.clone(), poll);
    next
}
