//! The cursor indicator node and the document key listeners.

use minenav_core::Overlay;
use wasm_bindgen::{JsCast as _, closure::Closure};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node, Window};

use crate::{WebError, app};

const INDICATOR_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("border", "2px solid red"),
    ("width", "24px"),
    ("height", "24px"),
    ("pointer-events", "none"),
];

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// Owns the indicator element and the listener closures.
///
/// The closures live as long as the overlay so the same function references
/// are passed to `addEventListener` and `removeEventListener`.
pub(crate) struct DomOverlay {
    window: Window,
    document: Document,
    indicator: HtmlElement,
    keydown: KeyListener,
    keyup: KeyListener,
    listening: bool,
}

impl std::fmt::Debug for DomOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomOverlay")
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}

impl DomOverlay {
    pub(crate) fn new(window: Window, document: Document) -> Result<Self, WebError> {
        let indicator = document
            .create_element("div")
            .map_err(|err| WebError::js("createElement", &err))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::NotAnHtmlElement)?;
        let style = indicator.style();
        for (property, value) in INDICATOR_STYLE {
            style
                .set_property(property, value)
                .map_err(|err| WebError::js("style.setProperty", &err))?;
        }

        let keydown = Closure::wrap(Box::new(app::on_key_down) as Box<dyn FnMut(KeyboardEvent)>);
        let keyup = Closure::wrap(Box::new(app::on_key_up) as Box<dyn FnMut(KeyboardEvent)>);

        Ok(Self {
            window,
            document,
            indicator,
            keydown,
            keyup,
            listening: false,
        })
    }

    fn set_listeners(&self, add: bool) {
        for (kind, listener) in [("keydown", &self.keydown), ("keyup", &self.keyup)] {
            let callback = listener.as_ref().unchecked_ref::<js_sys::Function>();
            let result = if add {
                self.document.add_event_listener_with_callback(kind, callback)
            } else {
                self.document.remove_event_listener_with_callback(kind, callback)
            };
            if let Err(err) = result {
                log::warn!("{}", WebError::js(kind, &err));
            }
        }
    }
}

impl Overlay<Element> for DomOverlay {
    fn indicator_attached(&self) -> bool {
        let indicator: &Node = self.indicator.as_ref();
        self.document
            .body()
            .is_some_and(|body| body.contains(Some(indicator)))
    }

    fn attach_indicator(&mut self) {
        let Some(body) = self.document.body() else {
            log::debug!("document has no body yet, indicator not attached");
            return;
        };
        if let Err(err) = body.append_child(&self.indicator) {
            log::warn!("{}", WebError::js("appendChild", &err));
        }
    }

    fn detach_indicator(&mut self) {
        // `remove` on a detached node is a no-op.
        self.indicator.remove();
    }

    fn place_indicator(&mut self, cell: &Element) {
        let rect = cell.get_bounding_client_rect();
        let scroll_x = self.window.scroll_x().unwrap_or_default();
        let scroll_y = self.window.scroll_y().unwrap_or_default();
        let style = self.indicator.style();
        let left = format!("{}px", rect.left() + scroll_x);
        let top = format!("{}px", rect.top() + scroll_y);
        for (property, value) in [("left", left), ("top", top)] {
            if let Err(err) = style.set_property(property, &value) {
                log::warn!("{}", WebError::js("style.setProperty", &err));
            }
        }
    }

    fn keys_listening(&self) -> bool {
        self.listening
    }

    fn listen_keys(&mut self) {
        // The DOM ignores duplicate registrations of the same callback.
        self.set_listeners(true);
        self.listening = true;
    }

    fn unlisten_keys(&mut self) {
        self.set_listeners(false);
        self.listening = false;
    }
}
