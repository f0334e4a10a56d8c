#![forbid(unsafe_code)]

//! The `load()`/`save()` port and its JSON implementations.
//!
//! On disk, a board is a project file: `{ "polls": { id: poll, ... } }`.
//! Earlier exports were a bare poll map with no wrapper; loading detects
//! the shape by looking for the `polls` key first and, failing that, for
//! poll-looking entries (`description` + `category` fields). Anything else
//! is rejected as unrecognized rather than silently read as an empty board.
//! Extra keys in a project file (template payloads, for instance) are
//! ignored.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use pollboard_core::PollSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Failure modes of the persistence boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed board file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unrecognized board file shape")]
    UnrecognizedShape,
}

/// The persistence port the core's caller wires in.
///
/// `load` supplies the last persisted collection; `save` snapshots the
/// current one. Implementations may be synchronous or defer actual writes.
pub trait BoardRepository {
    /// Read the persisted board.
    fn load(&self) -> Result<PollSet, StoreError>;

    /// Persist the given board.
    fn save(&self, polls: &PollSet) -> Result<(), StoreError>;
}

#[derive(Serialize)]
struct ProjectFileRef<'a> {
    polls: &'a PollSet,
}

#[derive(Deserialize)]
struct ProjectFile {
    polls: PollSet,
}

/// Encode a board as a pretty-printed project file.
pub fn encode_board(polls: &PollSet) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(&ProjectFileRef { polls })?)
}

/// Decode a board from project-file or legacy bare-map JSON.
pub fn decode_board(text: &str) -> Result<PollSet, StoreError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Object(map) = &value else {
        return Err(StoreError::UnrecognizedShape);
    };

    if map.contains_key("polls") {
        let project: ProjectFile = serde_json::from_value(value)?;
        return Ok(project.polls);
    }

    // Legacy shape: a bare map whose entries look like polls.
    let looks_like_poll_map = map
        .values()
        .next()
        .is_some_and(|entry| entry.get("description").is_some() && entry.get("category").is_some());
    if looks_like_poll_map {
        return Ok(serde_json::from_value(value)?);
    }

    Err(StoreError::UnrecognizedShape)
}

/// Project-file storage on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Store the board at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardRepository for JsonFileRepository {
    fn load(&self) -> Result<PollSet, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        let polls = decode_board(&text)?;
        debug!(path = %self.path.display(), polls = polls.len(), "board loaded");
        Ok(polls)
    }

    fn save(&self, polls: &PollSet) -> Result<(), StoreError> {
        let text = encode_board(polls)?;
        fs::write(&self.path, text)?;
        debug!(path = %self.path.display(), polls = polls.len(), "board saved");
        Ok(())
    }
}

/// In-process storage for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    polls: RefCell<PollSet>,
}

impl MemoryRepository {
    /// An empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing board.
    #[must_use]
    pub fn with_board(polls: PollSet) -> Self {
        Self {
            polls: RefCell::new(polls),
        }
    }
}

impl BoardRepository for MemoryRepository {
    fn load(&self) -> Result<PollSet, StoreError> {
        Ok(self.polls.borrow().clone())
    }

    fn save(&self, polls: &PollSet) -> Result<(), StoreError> {
        *self.polls.borrow_mut() = polls.clone();
        Ok(())
    }
}
