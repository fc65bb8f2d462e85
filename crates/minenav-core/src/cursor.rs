//! The logical cursor and the bounds it is clamped to.

use crate::{Direction, GridBounds, Position};

/// The cursor position plus the last located board bounds.
///
/// Every movement is total: requests that overshoot the board pin to the edge,
/// and while bounds are unknown movements do nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorState {
    position: Position,
    bounds: Option<GridBounds>,
}

impl CursorState {
    /// Creates a cursor at the origin with unknown bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the last located bounds.
    #[must_use]
    pub fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    /// Stores freshly located bounds.
    ///
    /// Known bounds re-clamp the position, so a smaller board never leaves the
    /// cursor outside it. Unknown bounds keep the position as is.
    pub fn set_bounds(&mut self, bounds: Option<GridBounds>) {
        self.bounds = bounds;
        if let Some(bounds) = bounds {
            self.position = bounds.clamp(self.position.x.into(), self.position.y.into());
        }
    }

    /// Moves by a signed offset, clamped into the bounds.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let x = i64::from(self.position.x) + i64::from(dx);
        let y = i64::from(self.position.y) + i64::from(dy);
        self.move_to(x, y);
    }

    /// Moves one cell in `direction`, clamped into the bounds.
    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        self.move_by(dx, dy);
    }

    /// Moves to an absolute coordinate, clamped into the bounds.
    pub fn move_to(&mut self, x: i64, y: i64) {
        if let Some(bounds) = self.bounds {
            self.position = bounds.clamp(x, y);
        }
    }

    /// Moves to the board edge in `direction`.
    pub fn snap_to_edge(&mut self, direction: Direction) {
        if let Some(bounds) = self.bounds {
            self.position = bounds.edge(self.position, direction);
        }
    }
}
