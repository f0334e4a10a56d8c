#![forbid(unsafe_code)]

//! Pointer-move controller: classifies a pointer-down-then-up sequence as a
//! click or a drag, and turns a drag into a placement decision.
//!
//! [`PointerMoveController`] is a stateful processor. The caller feeds it
//! raw pointer events together with the current poll snapshot and a
//! [`DropHitTester`]; it answers with at most one [`DragOutcome`] per
//! release.
//!
//! # State Machine
//!
//! ```text
//! Idle --down(primary)--> Armed --move beyond threshold--> Dragging
//! Armed --up(any button)--> Idle            (outcome: Clicked)
//! Dragging --up(primary)--> Idle            (outcome: Committed | Cancelled)
//! Dragging --up(secondary/aux)--> Dragging  (ignored)
//! any --cancel()--> Idle                    (no outcome)
//! ```
//!
//! # Invariants
//!
//! 1. Clicked and Committed never both emit for one down→up interaction:
//!    once the threshold is crossed, the release can only commit or cancel.
//! 2. The dragged poll's snapshot is captured at threshold-crossing time,
//!    not at pointer-down, so concurrent edits between the two are visible.
//! 3. Every poll lookup tolerates "not found": a poll deleted mid-gesture
//!    aborts to Idle (or clears the placeholder) instead of panicking.
//! 4. The placeholder's order key always excludes the dragged poll from its
//!    own neighbor computation.
//!
//! # Failure Modes
//!
//! - Pointer released outside every column: the placeholder is `None` and
//!   the release resolves to `Cancelled` (the poll stays where it was).
//! - The hit tester reports a rendered card whose poll no longer exists:
//!   the placeholder is cleared for that move.

use pollboard_core::category_index;
use pollboard_core::order_key;
use pollboard_core::{CategoryId, Poll, PollId, PollSet};
use tracing::{debug, trace};

use crate::geometry::Point;
use crate::hit_test::DropHitTester;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for click/drag disambiguation.
#[derive(Debug, Clone)]
pub struct DragConfig {
    /// Euclidean distance (pixels) the pointer must travel from its origin
    /// before a drag starts (default: 5.0). Large enough to absorb click
    /// jitter, small enough to feel immediate.
    pub drag_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Events and outcomes
// ---------------------------------------------------------------------------

/// Which pointer button an event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left / touch / pen tip.
    Primary,
    /// Right button (context menu).
    Secondary,
    /// Middle button.
    Auxiliary,
}

/// The live drop target while dragging: where the poll would land now.
#[derive(Debug, Clone, PartialEq)]
pub struct DropPlaceholder {
    pub category: CategoryId,
    /// Midpoint key between the neighbors at the insertion point.
    pub order: f64,
}

/// The card visually following the pointer during a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingCard {
    /// Snapshot of the poll taken when the drag threshold was crossed.
    pub poll: Poll,
    /// Current pointer position.
    pub pos: Point,
}

/// Terminal outcome of one pointer interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Released before the threshold: a plain click on the card.
    Clicked(PollId),
    /// Released over a valid drop target: apply via
    /// `pollboard_core::engine::move_poll`.
    Committed {
        poll_id: PollId,
        category: CategoryId,
        order: f64,
    },
    /// Released with no resolvable target, or cancelled: nothing moved.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    /// Primary button is down on a card; not yet known to be a drag.
    Armed { poll_id: PollId, origin: Point },
    /// Threshold crossed; the card floats with the pointer.
    Dragging {
        card: FloatingCard,
        placeholder: Option<DropPlaceholder>,
    },
}

// ---------------------------------------------------------------------------
// PointerMoveController
// ---------------------------------------------------------------------------

/// Stateful controller disambiguating clicks from drags and computing the
/// live drop placeholder.
///
/// Feed [`on_pointer_down`](Self::on_pointer_down),
/// [`on_pointer_move`](Self::on_pointer_move) and
/// [`on_pointer_up`](Self::on_pointer_up) in arrival order; all events are
/// expected on one thread.
#[derive(Debug)]
pub struct PointerMoveController {
    config: DragConfig,
    phase: Phase,
}

impl Default for PointerMoveController {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl PointerMoveController {
    /// Create a controller with the given configuration.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// Primary-button press on a poll card. Arms the controller; ignored
    /// for other buttons and while a drag is already live.
    pub fn on_pointer_down(&mut self, poll_id: &PollId, pos: Point, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if matches!(self.phase, Phase::Dragging { .. }) {
            return;
        }
        trace!(poll = %poll_id, "pointer armed");
        self.phase = Phase::Armed {
            poll_id: poll_id.clone(),
            origin: pos,
        };
    }

    /// Pointer movement. While armed, checks the drag threshold; while
    /// dragging, tracks the floating card and recomputes the placeholder.
    pub fn on_pointer_move(&mut self, polls: &PollSet, hit: &dyn DropHitTester, pos: Point) {
        match &mut self.phase {
            Phase::Idle => {}
            Phase::Armed { poll_id, origin } => {
                let poll_id = poll_id.clone();
                if origin.distance(pos) <= self.config.drag_threshold {
                    return;
                }
                // Snapshot at crossing time, not at pointer-down: content
                // may have changed, or the poll may be gone entirely.
                let Some(poll) = polls.get(&poll_id) else {
                    debug!(poll = %poll_id, "armed poll vanished, aborting");
                    self.phase = Phase::Idle;
                    return;
                };
                debug!(poll = %poll_id, "drag started");
                let card = FloatingCard {
                    poll: poll.clone(),
                    pos,
                };
                let placeholder = compute_placeholder(polls, hit, pos, &card.poll.id);
                self.phase = Phase::Dragging { card, placeholder };
            }
            Phase::Dragging { card, placeholder } => {
                card.pos = pos;
                *placeholder = compute_placeholder(polls, hit, pos, &card.poll.id);
            }
        }
    }

    /// Pointer release. Resolves the interaction:
    ///
    /// - armed → `Clicked` (any button);
    /// - dragging + primary → `Committed` when a placeholder is set,
    ///   `Cancelled` otherwise;
    /// - dragging + other button → ignored, the drag stays live.
    pub fn on_pointer_up(&mut self, button: PointerButton) -> Option<DragOutcome> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => None,
            Phase::Armed { poll_id, .. } => {
                trace!(poll = %poll_id, "click");
                Some(DragOutcome::Clicked(poll_id))
            }
            Phase::Dragging { card, placeholder } => {
                if button != PointerButton::Primary {
                    // Only a primary release commits; put the drag back.
                    self.phase = Phase::Dragging { card, placeholder };
                    return None;
                }
                match placeholder {
                    Some(target) => {
                        debug!(
                            poll = %card.poll.id,
                            category = %target.category,
                            order = target.order,
                            "drop committed"
                        );
                        Some(DragOutcome::Committed {
                            poll_id: card.poll.id,
                            category: target.category,
                            order: target.order,
                        })
                    }
                    None => {
                        debug!(poll = %card.poll.id, "drop outside any column, reverting");
                        Some(DragOutcome::Cancelled)
                    }
                }
            }
        }
    }

    /// Enter Dragging directly with a snapshot of `poll_id`, bypassing the
    /// threshold (context-menu "move" entry point). No-op if the poll is
    /// missing or a drag is already live.
    pub fn begin_drag(&mut self, polls: &PollSet, poll_id: &PollId, pos: Point) {
        if matches!(self.phase, Phase::Dragging { .. }) {
            return;
        }
        let Some(poll) = polls.get(poll_id) else {
            return;
        };
        debug!(poll = %poll_id, "drag started from menu");
        self.phase = Phase::Dragging {
            card: FloatingCard {
                poll: poll.clone(),
                pos,
            },
            placeholder: None,
        };
    }

    /// Force a return to Idle without committing (e.g. the dragged poll was
    /// deleted by another code path).
    pub fn cancel(&mut self) {
        if !matches!(self.phase, Phase::Idle) {
            debug!("drag cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// Whether a drag is currently live.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The floating card, while dragging.
    #[must_use]
    pub fn floating(&self) -> Option<&FloatingCard> {
        match &self.phase {
            Phase::Dragging { card, .. } => Some(card),
            _ => None,
        }
    }

    /// The current drop placeholder, while dragging over a column.
    #[must_use]
    pub fn placeholder(&self) -> Option<&DropPlaceholder> {
        match &self.phase {
            Phase::Dragging { placeholder, .. } => placeholder.as_ref(),
            _ => None,
        }
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Placement math
// ---------------------------------------------------------------------------

/// Resolve the drop target under `pos`: the column under the pointer, the
/// insertion slot among its rendered cards (first card whose vertical
/// midpoint lies below the pointer), and the midpoint order key between the
/// neighbors at that slot. The dragged poll never counts as its own
/// neighbor.
fn compute_placeholder(
    polls: &PollSet,
    hit: &dyn DropHitTester,
    pos: Point,
    dragged: &PollId,
) -> Option<DropPlaceholder> {
    let category = hit.column_at(pos)?;

    let siblings: Vec<&Poll> = category_index::polls_in_category(polls, &category)
        .into_iter()
        .filter(|poll| &poll.id != dragged)
        .collect();

    let mut next_id: Option<PollId> = None;
    for (poll_id, rect) in hit.card_rects(&category) {
        if &poll_id == dragged {
            continue;
        }
        if pos.y < rect.mid_y() {
            next_id = Some(poll_id);
            break;
        }
    }

    let order = match next_id {
        Some(next_id) => {
            let next_poll = polls.get(&next_id)?;
            let next_index = siblings.iter().position(|poll| poll.id == next_id)?;
            let before = next_index
                .checked_sub(1)
                .map(|index| siblings[index].order);
            order_key::midpoint(before, Some(next_poll.order))
        }
        // Past the last card (or an empty column): append.
        None => order_key::midpoint(siblings.last().map(|poll| poll.order), None),
    };

    Some(DropPlaceholder { category, order })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
