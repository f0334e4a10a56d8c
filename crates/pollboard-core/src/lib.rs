#![forbid(unsafe_code)]

//! Core: poll data model, order-key allocation, and the reorder engine.
//!
//! # Role in pollboard
//! `pollboard-core` is the pure transformation layer. It owns the poll
//! collection's shape and every operation that changes `(category, order)`
//! on a poll. It performs no I/O, holds no interactive state, and never
//! mutates a collection in place: each operation reads a snapshot and
//! returns a new one.
//!
//! # Primary responsibilities
//! - **Data model**: [`poll::Poll`], [`poll::PollSet`], id newtypes.
//! - **Order keys**: append / midpoint / re-index allocation ([`order_key`]).
//! - **Derived views**: polls grouped per category, sorted by key
//!   ([`category_index`]).
//! - **Mutations**: drop placement, duplicate-after, bulk arrangement,
//!   discrete move commands ([`engine`], [`command`]).
//! - **Export**: plain-text and pipe-delimited board dumps ([`export`]).
//!
//! # How it fits in the system
//! The drag controller (`pollboard-drag`) consumes read-only snapshots and
//! emits placement decisions that callers feed back into [`engine`]. The
//! persistence port (`pollboard-store`) round-trips [`poll::PollSet`]
//! through JSON. Neither direction is visible from here.

pub mod category_index;
pub mod command;
pub mod engine;
pub mod export;
pub mod order_key;
pub mod poll;

pub use command::MoveCommand;
pub use poll::{Category, CategoryId, Poll, PollDraft, PollId, PollOption, PollSet};
