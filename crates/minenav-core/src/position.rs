//! Board coordinates, directions and bounds.

use std::fmt;

/// A cell coordinate on the board.
///
/// `x` grows to the right and `y` grows downward, both starting at 0 in the
/// top-left corner, matching the `data-x`/`data-y` attributes of the host grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column (0-based).
    pub x: u32,
    /// Row (0-based).
    pub y: u32,
}

impl Position {
    /// The top-left corner.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the neighboring position in `direction`.
    ///
    /// Returns `None` when stepping left of column 0 or above row 0. Stepping
    /// past the far edges is not checked here; see [`GridBounds::contains`].
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Down => self.y.checked_add(1).map(|y| Self::new(self.x, y)),
            Direction::Left => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
            Direction::Right => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four board directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All directions, in up/down/left/right order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

/// A board axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// The largest coordinates observed on the board.
///
/// A board with a single cell has bounds `(0, 0)`. Boards whose size is not
/// known yet are represented as `Option<GridBounds>::None` by callers, never
/// as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridBounds {
    /// Largest column index.
    pub max_x: u32,
    /// Largest row index.
    pub max_y: u32,
}

impl GridBounds {
    /// Creates bounds from the largest column and row indices.
    #[must_use]
    pub const fn new(max_x: u32, max_y: u32) -> Self {
        Self { max_x, max_y }
    }

    /// Folds an iterator of cell coordinates into bounds.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use minenav_core::{GridBounds, Position};
    ///
    /// let cells = [Position::new(0, 3), Position::new(5, 1)];
    /// assert_eq!(GridBounds::from_coordinates(cells), Some(GridBounds::new(5, 3)));
    /// assert_eq!(GridBounds::from_coordinates([]), None);
    /// ```
    #[must_use]
    pub fn from_coordinates<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        cells.into_iter().fold(None, |acc, pos| {
            Some(match acc {
                None => Self::new(pos.x, pos.y),
                Some(bounds) => Self::new(bounds.max_x.max(pos.x), bounds.max_y.max(pos.y)),
            })
        })
    }

    /// Returns `true` if `pos` lies inside the bounds.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x <= self.max_x && pos.y <= self.max_y
    }

    /// Pins an arbitrary signed coordinate pair into the bounds.
    #[must_use]
    pub fn clamp(self, x: i64, y: i64) -> Position {
        Position::new(clamp_axis(x, self.max_x), clamp_axis(y, self.max_y))
    }

    /// Returns the position on the edge reached by moving from `from` in
    /// `direction`, keeping the other coordinate.
    #[must_use]
    pub const fn edge(self, from: Position, direction: Direction) -> Position {
        match direction {
            Direction::Up => Position::new(from.x, 0),
            Direction::Down => Position::new(from.x, self.max_y),
            Direction::Left => Position::new(0, from.y),
            Direction::Right => Position::new(self.max_x, from.y),
        }
    }
}

fn clamp_axis(value: i64, max: u32) -> u32 {
    let clamped = value.clamp(0, i64::from(max));
    // In range after clamping.
    u32::try_from(clamped).unwrap_or(max)
}
