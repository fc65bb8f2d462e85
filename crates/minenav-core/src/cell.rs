//! Cell markers and classification.

use bitflags::bitflags;

bitflags! {
    /// The raw state markers a host cell carries.
    ///
    /// Hosts may set several markers at once (a flagged cell usually still
    /// carries the closed marker). [`Classification::from_markers`] reduces them
    /// to a single value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellMarkers: u8 {
        /// The cell has not been opened.
        const CLOSED = 1 << 0;
        /// The cell has been opened.
        const REVEALED = 1 << 1;
        /// The cell carries a flag.
        const FLAGGED = 1 << 2;
    }
}

/// The visible state of a cell, as far as navigation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Classification {
    /// Not opened yet.
    #[display("closed")]
    Closed,
    /// Opened.
    #[display("revealed")]
    Revealed,
    /// Flagged (and not also marked closed).
    #[display("flagged")]
    Flagged,
    /// A cell exists but carries none of the recognized markers.
    #[display("unknown")]
    Unknown,
}

impl Classification {
    /// Reduces a marker set to one classification.
    ///
    /// Precedence is closed, then revealed, then flagged.
    ///
    /// # Examples
    ///
    /// ```
    /// use minenav_core::{CellMarkers, Classification};
    ///
    /// let flagged = CellMarkers::CLOSED | CellMarkers::FLAGGED;
    /// assert_eq!(Classification::from_markers(flagged), Classification::Closed);
    /// assert_eq!(Classification::from_markers(CellMarkers::empty()), Classification::Unknown);
    /// ```
    #[must_use]
    pub fn from_markers(markers: CellMarkers) -> Self {
        if markers.contains(CellMarkers::CLOSED) {
            Self::Closed
        } else if markers.contains(CellMarkers::REVEALED) {
            Self::Revealed
        } else if markers.contains(CellMarkers::FLAGGED) {
            Self::Flagged
        } else {
            Self::Unknown
        }
    }
}
