#![forbid(unsafe_code)]

//! Drag: the pointer-move controller for pollboard.
//!
//! # Role in pollboard
//! `pollboard-drag` turns a raw pointer stream (down, move, up) into one of
//! three discrete outcomes: a click on a poll card, a committed placement
//! decision `(poll, category, order)`, or a cancelled drag. It owns the
//! only piece of transient interactive state in the system; the poll
//! collection itself stays with the caller and is read per event.
//!
//! # Primary responsibilities
//! - **PointerMoveController**: the Idle → Armed → Dragging state machine
//!   with distance-threshold click/drag disambiguation.
//! - **DropHitTester**: the injected seam through which the rendering layer
//!   supplies column bounds and rendered card rectangles.
//! - **Geometry**: pixel-space points and rectangles for hit testing.
//!
//! # How it fits in the system
//! The caller feeds `on_pointer_*` events, renders from the controller's
//! accessors (floating card, drop placeholder), and applies a `Committed`
//! outcome through `pollboard_core::engine::move_poll`.

pub mod controller;
pub mod geometry;

pub use controller::{
    DragConfig, DragOutcome, DropPlaceholder, FloatingCard, PointerButton, PointerMoveController,
};
pub use geometry::{Point, Rect};
pub use hit_test::DropHitTester;
