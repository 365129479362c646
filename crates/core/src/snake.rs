//! Snake module - the head plus a ring of trailing segments
//!
//! The body is a deque ordered by distance from the head (front = nearest).
//! Per-tick follow-up rotates the tail segment to the head's previous
//! position, which is O(1) regardless of body length - no per-segment
//! shifting ever happens.

use std::collections::VecDeque;

use tui_snake_types::Position;

/// The snake: a mutable head and the ordered trailing segments.
///
/// The head is never stored in the body deque, and body length equals the
/// number of apples eaten since the last restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: Position,
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Self {
            head,
            body: VecDeque::new(),
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn set_head(&mut self, head: Position) {
        self.head = head;
    }

    /// Number of trailing segments (not counting the head).
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Trailing segment positions, nearest-to-head first.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Insert a new segment directly behind the head (apple eaten).
    ///
    /// The segment starts at `pos` - normally the head's current cell - and
    /// gets carried along by [`follow_head`](Self::follow_head) from the next
    /// tick on.
    pub fn grow_at_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Rotate the tail segment up to the head's pre-move position.
    ///
    /// Each remaining segment implicitly "takes the place of the one ahead"
    /// without moving: only the back element is relocated. No-op while the
    /// body is empty.
    pub fn follow_head(&mut self, prev_head: Position) {
        if self.body.pop_back().is_some() {
            self.body.push_front(prev_head);
        }
    }

    /// Drop all trailing segments and put the head back at `head`.
    pub fn reset(&mut self, head: Position) {
        self.head = head;
        self.body.clear();
    }
}
