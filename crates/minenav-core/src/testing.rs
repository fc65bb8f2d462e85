//! In-memory stand-ins for the host page.
//!
//! [`FakeGrid`] is parsed from a small board diagram, [`RecordingSynthesizer`]
//! records every synthetic input it is asked to send, and [`FakeOverlay`]
//! tracks the indicator and listener state. Together they let the whole
//! [`InputController`](crate::InputController) run without a browser.
//!
//! # Board diagrams
//!
//! One row per line, one character per cell. Surrounding whitespace and blank
//! lines are ignored.
//!
//! | char | cell |
//! |---|---|
//! | `#` | closed |
//! | `.` | revealed |
//! | `F` | closed and flagged |
//! | `!` | flagged only |
//! | `?` | present, no markers |
//! | `_` | no cell |
//!
//! # Example
//!
//! ```
//! use minenav_core::{Classification, GridLocator, GridBounds, Position, testing::FakeGrid};
//!
//! let grid: FakeGrid = "
//!     #F.
//!     ?_.
//! "
//! .parse()
//! .unwrap();
//! assert_eq!(grid.locate(), Some(GridBounds::new(2, 1)));
//! assert_eq!(grid.classify_at(Position::new(1, 0)), Some(Classification::Closed));
//! assert_eq!(grid.classify_at(Position::new(1, 1)), None);
//! ```

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::{
    CellMarkers, EventSynthesizer, GridBounds, GridLocator, MouseButton, Overlay, Position,
};

/// A board held in memory, addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeGrid {
    cells: BTreeMap<Position, CellMarkers>,
}

impl FakeGrid {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fully closed `width` × `height` board.
    #[must_use]
    pub fn closed(width: u32, height: u32) -> Self {
        let mut grid = Self::new();
        for y in 0..height {
            for x in 0..width {
                grid.set(Position::new(x, y), CellMarkers::CLOSED);
            }
        }
        grid
    }

    /// Inserts or replaces the cell at `pos`.
    pub fn set(&mut self, pos: Position, markers: CellMarkers) {
        self.cells.insert(pos, markers);
    }

    /// Removes the cell at `pos`.
    pub fn remove(&mut self, pos: Position) {
        self.cells.remove(&pos);
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl GridLocator for FakeGrid {
    type Cell = Position;

    fn locate(&self) -> Option<GridBounds> {
        GridBounds::from_coordinates(self.cells.keys().copied())
    }

    fn cell_at(&self, pos: Position) -> Option<Position> {
        self.cells.contains_key(&pos).then_some(pos)
    }

    fn markers(&self, cell: &Position) -> CellMarkers {
        self.cells.get(cell).copied().unwrap_or_default()
    }
}

/// Error returned when a board diagram contains an unknown character.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell {ch:?} at {position}")]
pub struct ParseBoardError {
    /// The offending character.
    pub ch: char,
    /// Where it appeared.
    pub position: Position,
}

impl FromStr for FakeGrid {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let rows = s.lines().map(str::trim).filter(|line| !line.is_empty());
        for (y, row) in (0..).zip(rows) {
            for (x, ch) in (0..).zip(row.chars()) {
                let position = Position::new(x, y);
                let markers = match ch {
                    '#' => CellMarkers::CLOSED,
                    '.' => CellMarkers::REVEALED,
                    'F' => CellMarkers::CLOSED | CellMarkers::FLAGGED,
                    '!' => CellMarkers::FLAGGED,
                    '?' => CellMarkers::empty(),
                    '_' => continue,
                    _ => return Err(ParseBoardError { ch, position }),
                };
                grid.set(position, markers);
            }
        }
        Ok(grid)
    }
}

/// One synthetic input sent to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticEvent {
    /// A press-then-release pair.
    Press {
        /// Target cell.
        cell: Position,
        /// Button used for both halves of the pair.
        button: MouseButton,
    },
    /// A context-menu event.
    ContextMenu {
        /// Target cell.
        cell: Position,
    },
}

impl fmt::Display for SyntheticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntheticEvent::Press { cell, button } => write!(f, "press {button} at {cell}"),
            SyntheticEvent::ContextMenu { cell } => write!(f, "contextmenu at {cell}"),
        }
    }
}

/// Records synthetic input instead of sending it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSynthesizer {
    events: Vec<SyntheticEvent>,
}

impl RecordingSynthesizer {
    /// Returns everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[SyntheticEvent] {
        &self.events
    }

    /// Returns and clears everything recorded so far.
    pub fn take_events(&mut self) -> Vec<SyntheticEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSynthesizer<Position> for RecordingSynthesizer {
    fn send_press(&mut self, cell: &Position, button: MouseButton) {
        self.events.push(SyntheticEvent::Press {
            cell: *cell,
            button,
        });
    }

    fn send_context_menu(&mut self, cell: &Position) {
        self.events.push(SyntheticEvent::ContextMenu { cell: *cell });
    }
}

/// Tracks indicator and listener state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeOverlay {
    /// Whether the indicator is in the document.
    pub attached: bool,
    /// Whether key listeners are registered.
    pub listening: bool,
    /// Number of times key listeners were registered.
    pub listen_count: usize,
    /// Number of times the indicator was inserted.
    pub attach_count: usize,
    /// The cell the indicator was last placed over.
    pub placed_over: Option<Position>,
}

impl Overlay<Position> for FakeOverlay {
    fn indicator_attached(&self) -> bool {
        self.attached
    }

    fn attach_indicator(&mut self) {
        self.attached = true;
        self.attach_count += 1;
    }

    fn detach_indicator(&mut self) {
        self.attached = false;
    }

    fn place_indicator(&mut self, cell: &Position) {
        self.placed_over = Some(*cell);
    }

    fn keys_listening(&self) -> bool {
        self.listening
    }

    fn listen_keys(&mut self) {
        self.listening = true;
        self.listen_count += 1;
    }

    fn unlisten_keys(&mut self) {
        self.listening = false;
    }
}
