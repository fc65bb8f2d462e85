//! Read access to the host grid.

use crate::{CellMarkers, Classification, GridBounds, Position};

/// Pull-based view of the host grid.
///
/// Implementations query the host every time they are called. Nothing here is
/// cached, since the game mutates the grid out of band.
pub trait GridLocator {
    /// Opaque handle to one cell.
    type Cell;

    /// Scans every cell and returns the largest coordinates observed.
    ///
    /// Returns `None` when no cell with parseable coordinates exists.
    fn locate(&self) -> Option<GridBounds>;

    /// Looks up the cell at `pos`, or `None` if the host has no such cell.
    fn cell_at(&self, pos: Position) -> Option<Self::Cell>;

    /// Reads the raw state markers of a cell.
    fn markers(&self, cell: &Self::Cell) -> CellMarkers;

    /// Classifies a cell.
    fn classify(&self, cell: &Self::Cell) -> Classification {
        Classification::from_markers(self.markers(cell))
    }

    /// Classifies the cell at `pos`, or `None` if the host has no such cell.
    fn classify_at(&self, pos: Position) -> Option<Classification> {
        self.cell_at(pos).map(|cell| self.classify(&cell))
    }
}

/// Parses a positional attribute value.
///
/// Only non-negative decimal integers are accepted; surrounding whitespace is
/// ignored. Anything else excludes the cell from bounds detection.
///
/// # Examples
///
/// ```
/// use minenav_core::parse_coordinate;
///
/// assert_eq!(parse_coordinate("12"), Some(12));
/// assert_eq!(parse_coordinate(" 3 "), Some(3));
/// assert_eq!(parse_coordinate("-1"), None);
/// assert_eq!(parse_coordinate("1.5"), None);
/// assert_eq!(parse_coordinate(""), None);
/// ```
#[must_use]
pub fn parse_coordinate(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
