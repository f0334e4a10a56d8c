#![forbid(unsafe_code)]

//! Store: the persistence port for pollboard.
//!
//! # Role in pollboard
//! The core is a pure transformation layer with zero awareness of storage
//! timing or failure; this crate is the boundary it hands snapshots to. A
//! [`repository::BoardRepository`] loads the last persisted
//! [`pollboard_core::PollSet`] and saves a new one; the embedder decides
//! when (write-on-change, debounced, on exit).
//!
//! # Primary responsibilities
//! - **BoardRepository**: the `load()`/`save()` port.
//! - **JsonFileRepository**: project-file JSON on disk, accepting both the
//!   current `{ "polls": { ... } }` shape and the legacy bare poll map.
//! - **MemoryRepository**: in-process storage for tests and embedding.
//! - **Seed data**: the default board and the fixed category set.

pub mod repository;
pub mod seed;

pub use repository::{BoardRepository, JsonFileRepository, MemoryRepository, StoreError};
pub use seed::{default_categories, default_category_sequence, seed_board};
