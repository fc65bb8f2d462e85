//! Content script configuration.
//!
//! The defaults match the markup of the host game: cells are `div.cell`
//! elements carrying `data-x`/`data-y` attributes, and their state is encoded
//! in the `hd_closed`, `hd_type` and `flagged` classes.

use minenav_core::{NavConfig, Position};

/// CSS selectors, attribute names and class names that describe the host grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridSelectors {
    /// Selector matching every cell.
    pub cell: String,
    /// Attribute holding the column.
    pub x_attribute: String,
    /// Attribute holding the row.
    pub y_attribute: String,
    /// Class present on closed cells.
    pub closed_class: String,
    /// Class present on revealed cells.
    pub revealed_class: String,
    /// Class present on flagged cells.
    pub flagged_class: String,
}

impl Default for GridSelectors {
    fn default() -> Self {
        Self {
            cell: "div.cell".to_owned(),
            x_attribute: "data-x".to_owned(),
            y_attribute: "data-y".to_owned(),
            closed_class: "hd_closed".to_owned(),
            revealed_class: "hd_type".to_owned(),
            flagged_class: "flagged".to_owned(),
        }
    }
}

impl GridSelectors {
    /// Builds the selector for the single cell at `pos`.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> String {
        format!(
            r#"{}[{}="{}"][{}="{}"]"#,
            self.cell, self.x_attribute, pos.x, self.y_attribute, pos.y
        )
    }
}

/// Everything [`configure`](crate::configure) accepts.
///
/// Deserialized from a plain JS object; missing keys keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebConfig {
    /// Controller behavior.
    #[serde(flatten)]
    pub nav: NavConfig,
    /// Host grid markup.
    pub selectors: GridSelectors,
}
