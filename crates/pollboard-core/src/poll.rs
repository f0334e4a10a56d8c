#![forbid(unsafe_code)]

//! Poll data model.
//!
//! A board is a single [`PollSet`]: a map from [`PollId`] to [`Poll`],
//! owned by the caller. Operations elsewhere in this crate take a snapshot
//! by reference and return a fresh map. `PollSet` is a `BTreeMap` so that
//! iteration order is deterministic; the stable sorts in
//! [`category_index`](crate::category_index) rely on this for tie-breaking
//! when two siblings transiently share an order key.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a poll. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PollId(String);

impl PollId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier: `poll_` plus an 8-hex-char UUID prefix.
    #[must_use]
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("poll_{}", &uuid[..8]))
    }

    /// The identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PollId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier of a category (board column).
///
/// The set of valid categories is a closed enumeration owned by the caller;
/// this crate treats the values as opaque and never creates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryId(String);

impl CategoryId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A category descriptor supplied by the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
}

impl Category {
    /// Create a descriptor.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            title: title.into(),
        }
    }
}

/// One answer option of a poll, ordered by its position in `Poll::options`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PollOption {
    pub id: String,
    pub text: String,
}

impl PollOption {
    /// Create an option.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One poll record on the board.
///
/// `order` is a floating-point ordering key establishing a strict total
/// order among polls sharing a `category`. Fractional values are a valid
/// transient state between a placement and the re-index that follows it;
/// keys are never compared across categories.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Poll {
    pub id: PollId,
    pub category: CategoryId,
    pub description: String,
    pub options: Vec<PollOption>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thread_title: Option<String>,
    pub order: f64,
}

impl Poll {
    /// Reorder one option by index splice: remove at `from`, insert at `to`.
    ///
    /// Options use plain positional order, not fractional keys. Out-of-range
    /// indices are a no-op.
    pub fn move_option(&mut self, from: usize, to: usize) {
        if from >= self.options.len() || to >= self.options.len() || from == to {
            return;
        }
        let option = self.options.remove(from);
        self.options.insert(to, option);
    }
}

/// Content fields of a poll, without identity or placement.
///
/// Used for creation (the engine assigns id and an appended order key) and
/// for content updates (identity and key survive unless the category moves).
#[derive(Debug, Clone, PartialEq)]
pub struct PollDraft {
    pub category: CategoryId,
    pub description: String,
    pub options: Vec<PollOption>,
    pub tags: Vec<String>,
    pub thread_title: Option<String>,
}

impl PollDraft {
    /// A draft with the given category and description and no options.
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: CategoryId::new(category),
            description: description.into(),
            options: Vec::new(),
            tags: Vec::new(),
            thread_title: None,
        }
    }
}

/// The full externally-owned poll collection.
pub type PollSet = BTreeMap<PollId, Poll>;

#[cfg(test)]
mod tests {
    use super::*;

    fn poll_with_options(texts: &[&str]) -> Poll {
        Poll {
            id: PollId::from("poll_x"),
            category: CategoryId::from("ZERG"),
            description: "test".into(),
            options: texts
                .iter()
                .enumerate()
                .map(|(i, t)| PollOption::new(format!("opt_{i}"), *t))
                .collect(),
            tags: Vec::new(),
            thread_title: None,
            order: 10.0,
        }
    }

    #[test]
    fn generated_ids_have_prefix_and_length() {
        let id = PollId::generate();
        assert!(id.as_str().starts_with("poll_"));
        assert_eq!(id.as_str().len(), "poll_".len() + 8);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = PollId::generate();
        let b = PollId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn move_option_splices_forward() {
        let mut poll = poll_with_options(&["a", "b", "c", "d"]);
        poll.move_option(0, 2);
        let texts: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn move_option_splices_backward() {
        let mut poll = poll_with_options(&["a", "b", "c", "d"]);
        poll.move_option(3, 1);
        let texts: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn move_option_out_of_range_is_noop() {
        let mut poll = poll_with_options(&["a", "b"]);
        let before = poll.options.clone();
        poll.move_option(0, 5);
        poll.move_option(5, 0);
        assert_eq!(poll.options, before);
    }

    #[test]
    fn move_option_same_index_is_noop() {
        let mut poll = poll_with_options(&["a", "b", "c"]);
        let before = poll.options.clone();
        poll.move_option(1, 1);
        assert_eq!(poll.options, before);
    }
}
