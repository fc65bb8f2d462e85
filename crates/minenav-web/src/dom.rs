//! DOM adapters for the grid read and write sides.

use minenav_core::{
    CellMarkers, EventSynthesizer, GridBounds, GridLocator, MouseButton, Position,
    parse_coordinate,
};
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, MouseEvent, MouseEventInit};

use crate::{WebError, config::GridSelectors};

/// Reads cells straight from the document on every call.
#[derive(Debug, Clone)]
pub(crate) struct DomGrid {
    document: Document,
    selectors: GridSelectors,
}

impl DomGrid {
    pub(crate) fn new(document: Document, selectors: GridSelectors) -> Self {
        Self {
            document,
            selectors,
        }
    }

    fn coordinate(&self, cell: &Element, attribute: &str) -> Option<u32> {
        let value = cell.get_attribute(attribute)?;
        let parsed = parse_coordinate(&value);
        if parsed.is_none() {
            log::trace!("ignoring cell with {attribute}={value:?}");
        }
        parsed
    }
}

impl GridLocator for DomGrid {
    type Cell = Element;

    fn locate(&self) -> Option<GridBounds> {
        let cells = match self.document.query_selector_all(&self.selectors.cell) {
            Ok(cells) => cells,
            Err(err) => {
                log::warn!("{}", WebError::js("querySelectorAll", &err));
                return None;
            }
        };

        let positions = (0..cells.length())
            .filter_map(|i| cells.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|cell| {
                let x = self.coordinate(&cell, &self.selectors.x_attribute)?;
                let y = self.coordinate(&cell, &self.selectors.y_attribute)?;
                Some(Position::new(x, y))
            });
        GridBounds::from_coordinates(positions)
    }

    fn cell_at(&self, pos: Position) -> Option<Element> {
        let selector = self.selectors.cell_at(pos);
        self.document
            .query_selector(&selector)
            .unwrap_or_else(|err| {
                log::warn!("{}", WebError::js("querySelector", &err));
                None
            })
    }

    fn markers(&self, cell: &Element) -> CellMarkers {
        let classes = cell.class_list();
        let mut markers = CellMarkers::empty();
        markers.set(
            CellMarkers::CLOSED,
            classes.contains(&self.selectors.closed_class),
        );
        markers.set(
            CellMarkers::REVEALED,
            classes.contains(&self.selectors.revealed_class),
        );
        markers.set(
            CellMarkers::FLAGGED,
            classes.contains(&self.selectors.flagged_class),
        );
        markers
    }
}

/// Dispatches bubbling mouse events on cell elements.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DomSynthesizer;

impl DomSynthesizer {
    fn fire(cell: &Element, kind: &str, button: MouseButton) {
        let init = MouseEventInit::new();
        init.set_bubbles(true);
        init.set_button(button.button());
        init.set_buttons(button.buttons());

        let result = MouseEvent::new_with_mouse_event_init_dict(kind, &init)
            .and_then(|event| cell.dispatch_event(&event));
        if let Err(err) = result {
            log::warn!("{}", WebError::js(kind, &err));
        } else {
            log::trace!("dispatched {kind} ({button})");
        }
    }
}

impl EventSynthesizer<Element> for DomSynthesizer {
    fn send_press(&mut self, cell: &Element, button: MouseButton) {
        Self::fire(cell, "mousedown", button);
        Self::fire(cell, "mouseup", button);
    }

    fn send_context_menu(&mut self, cell: &Element) {
        Self::fire(cell, "contextmenu", MouseButton::Secondary);
    }
}
