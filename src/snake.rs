use std::collections::VecDeque;

use crate::geometry::Position;

/// Ordered snake body, head first.
///
/// A snake is a value: moving it produces a new `Snake` and leaves the
/// original untouched.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Segments that stay occupied through the next tick.
    ///
    /// The tail vacates its cell unless the snake is growing, so it is left
    /// out in that case. The head is included: after the move it becomes the
    /// neck.
    pub fn collision_body(&self, growing: bool) -> impl Iterator<Item = &Position> {
        let end = if growing {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        self.body.range(..end)
    }

    /// Returns a snake advanced onto `next_head`, keeping the tail if growing.
    #[must_use]
    pub fn moved_to(&self, next_head: Position, growing: bool) -> Self {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !growing {
            let _ = body.pop_back();
        }
        Self { body }
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if two segments share a cell.
    #[must_use]
    pub fn overlaps_itself(&self) -> bool {
        self.body
            .iter()
            .enumerate()
            .any(|(index, segment)| self.body.iter().skip(index + 1).any(|other| other == segment))
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
