#![forbid(unsafe_code)]

//! Discrete move commands: keyboard/menu-driven repositioning within a
//! poll's current category.
//!
//! Unlike a drag, the full sibling list is known here, so no midpoint math
//! is needed: the target index is computed, the id list spliced, and the
//! whole category re-indexed. Commands on a poll already at the requested
//! boundary (or on a missing id) return the input unchanged.

use crate::category_index;
use crate::order_key;
use crate::poll::{PollId, PollSet};

/// A deterministic repositioning within the poll's current category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveCommand {
    /// One position earlier.
    Up,
    /// One position later.
    Down,
    /// First position.
    ToTop,
    /// Last position.
    ToBottom,
}

/// Apply `command` to `id`, re-indexing its category on change.
#[must_use]
pub fn apply_move_command(polls: &PollSet, id: &PollId, command: MoveCommand) -> PollSet {
    let Some(target) = polls.get(id) else {
        return polls.clone();
    };
    let mut ids = category_index::sorted_ids(polls, &target.category);
    let Some(current) = ids.iter().position(|i| i == id) else {
        return polls.clone();
    };

    let destination = match command {
        MoveCommand::Up => current.saturating_sub(1),
        MoveCommand::Down => (current + 1).min(ids.len() - 1),
        MoveCommand::ToTop => 0,
        MoveCommand::ToBottom => ids.len() - 1,
    };
    if destination == current {
        return polls.clone();
    }

    let moved = ids.remove(current);
    ids.insert(destination, moved);

    let mut next = polls.clone();
    for (index, pid) in ids.iter().enumerate() {
        if let Some(poll) = next.get_mut(pid) {
            poll.order = order_key::reindexed_key(index);
        }
    }
    next
}

/// Move one position earlier in the category.
#[must_use]
pub fn move_up(polls: &PollSet, id: &PollId) -> PollSet {
    apply_move_command(polls, id, MoveCommand::Up)
}

/// Move one position later in the category.
#[must_use]
pub fn move_down(polls: &PollSet, id: &PollId) -> PollSet {
    apply_move_command(polls, id, MoveCommand::Down)
}

/// Move to the first position in the category.
#[must_use]
pub fn move_to_top(polls: &PollSet, id: &PollId) -> PollSet {
    apply_move_command(polls, id, MoveCommand::ToTop)
}

/// Move to the last position in the category.
#[must_use]
pub fn move_to_bottom(polls: &PollSet, id: &PollId) -> PollSet {
    apply_move_command(polls, id, MoveCommand::ToBottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::{CategoryId, Poll};

    fn poll(id: &str, category: &str, order: f64) -> Poll {
        Poll {
            id: PollId::from(id),
            category: CategoryId::from(category),
            description: String::new(),
            options: Vec::new(),
            tags: Vec::new(),
            thread_title: None,
            order,
        }
    }

    fn zerg_board() -> PollSet {
        [
            poll("a", "ZERG", 10.0),
            poll("b", "ZERG", 20.0),
            poll("c", "ZERG", 30.0),
        ]
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect()
    }

    fn zerg_ids(polls: &PollSet) -> Vec<PollId> {
        category_index::sorted_ids(polls, &CategoryId::from("ZERG"))
    }

    #[test]
    fn move_up_swaps_with_predecessor() {
        let next = move_up(&zerg_board(), &PollId::from("c"));
        assert_eq!(
            zerg_ids(&next),
            vec![PollId::from("a"), PollId::from("c"), PollId::from("b")]
        );
        assert_eq!(next[&PollId::from("a")].order, 10.0);
        assert_eq!(next[&PollId::from("c")].order, 20.0);
        assert_eq!(next[&PollId::from("b")].order, 30.0);
    }

    #[test]
    fn move_down_swaps_with_successor() {
        let next = move_down(&zerg_board(), &PollId::from("a"));
        assert_eq!(
            zerg_ids(&next),
            vec![PollId::from("b"), PollId::from("a"), PollId::from("c")]
        );
    }

    #[test]
    fn move_to_top_relocates_and_reindexes() {
        let next = move_to_top(&zerg_board(), &PollId::from("c"));
        assert_eq!(
            zerg_ids(&next),
            vec![PollId::from("c"), PollId::from("a"), PollId::from("b")]
        );
        let keys: Vec<f64> = zerg_ids(&next)
            .iter()
            .map(|id| next[id].order)
            .collect();
        assert_eq!(keys, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn move_to_bottom_relocates() {
        let next = move_to_bottom(&zerg_board(), &PollId::from("a"));
        assert_eq!(
            zerg_ids(&next),
            vec![PollId::from("b"), PollId::from("c"), PollId::from("a")]
        );
    }

    #[test]
    fn boundary_moves_are_noops() {
        let set = zerg_board();
        assert_eq!(move_up(&set, &PollId::from("a")), set);
        assert_eq!(move_to_top(&set, &PollId::from("a")), set);
        assert_eq!(move_down(&set, &PollId::from("c")), set);
        assert_eq!(move_to_bottom(&set, &PollId::from("c")), set);
    }

    #[test]
    fn missing_id_is_noop_for_all_commands() {
        let set = zerg_board();
        let gone = PollId::from("gone");
        for command in [
            MoveCommand::Up,
            MoveCommand::Down,
            MoveCommand::ToTop,
            MoveCommand::ToBottom,
        ] {
            assert_eq!(apply_move_command(&set, &gone, command), set);
        }
    }

    #[test]
    fn single_poll_category_never_changes() {
        let set: PollSet = [poll("only", "NOVA", 10.0)]
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        for command in [
            MoveCommand::Up,
            MoveCommand::Down,
            MoveCommand::ToTop,
            MoveCommand::ToBottom,
        ] {
            assert_eq!(apply_move_command(&set, &PollId::from("only"), command), set);
        }
    }

    #[test]
    fn commands_do_not_leak_across_categories() {
        let mut set = zerg_board();
        let other = poll("x", "TERRAN", 10.0);
        set.insert(other.id.clone(), other);
        let next = move_to_top(&set, &PollId::from("c"));
        assert_eq!(next[&PollId::from("x")].order, 10.0);
        assert_eq!(next[&PollId::from("x")].category, CategoryId::from("TERRAN"));
    }
}
