//! Glue between browser events and the shared controller.
//!
//! The controller lives in a thread-local slot. Event callbacks borrow it for
//! the duration of one event. Synthetic pointer input runs the host's handlers
//! synchronously, so a navigation signal can arrive while a key event still
//! holds the borrow; such signals are queued and replayed once the borrow is
//! released.

use std::cell::{Cell, RefCell};

use minenav_core::{InputController, KeyInput, KeyResponse};
use wasm_bindgen::{JsCast as _, closure::Closure};
use web_sys::{Event, KeyboardEvent, Window};

use crate::{
    WebError,
    config::WebConfig,
    dom::{DomGrid, DomSynthesizer},
    overlay::DomOverlay,
};

type WebController = InputController<DomGrid, DomSynthesizer, DomOverlay>;

/// Navigation signals that may change the page identity.
const NAVIGATION_EVENTS: [&str; 6] = [
    "popstate",
    "pushstate",
    "replacestate",
    "replaceState",
    "DOMContentLoaded",
    "load",
];

thread_local! {
    static CONTROLLER: RefCell<Option<WebController>> = const { RefCell::new(None) };
    static NAVIGATION_PENDING: Cell<bool> = const { Cell::new(false) };
}

fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

/// Runs `f` on the controller unless it is missing or already borrowed.
fn with_controller<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut WebController) -> R,
{
    CONTROLLER.with(|cell| {
        let mut guard = cell.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}

/// Builds a controller for `config` and evaluates the current page.
///
/// Any previous controller is deactivated first.
pub(crate) fn install(config: &WebConfig) -> Result<(), WebError> {
    let window = window()?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let grid = DomGrid::new(document.clone(), config.selectors.clone());
    let overlay = DomOverlay::new(window, document)?;
    let controller = InputController::new(&config.nav, grid, DomSynthesizer, overlay);

    let previous = CONTROLLER.with(|cell| {
        cell.try_borrow_mut()
            .map(|mut slot| slot.replace(controller))
            .map_err(|_| WebError::Busy)
    })?;
    if let Some(mut previous) = previous {
        previous.deactivate();
    }

    on_navigation();
    Ok(())
}

/// Registers the navigation listeners on the window.
///
/// Listeners are leaked on purpose: they live as long as the page.
pub(crate) fn listen_navigation() -> Result<(), WebError> {
    let window = window()?;
    for kind in NAVIGATION_EVENTS {
        let listener = Closure::wrap(Box::new(|_: Event| on_navigation()) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            .map_err(|err| WebError::js(kind, &err))?;
        listener.forget();
    }
    Ok(())
}

fn current_path() -> Option<String> {
    let path = web_sys::window()?.location().pathname();
    match path {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("{}", WebError::js("location.pathname", &err));
            None
        }
    }
}

/// Re-evaluates the page identity, now or as soon as the controller is free.
pub(crate) fn on_navigation() {
    NAVIGATION_PENDING.set(true);
    drain_navigation();
}

fn drain_navigation() {
    while NAVIGATION_PENDING.get() {
        let Some(path) = current_path() else {
            NAVIGATION_PENDING.set(false);
            return;
        };
        let synced = with_controller(|controller| {
            NAVIGATION_PENDING.set(false);
            controller.sync_activation(&path)
        });
        if synced.is_none() {
            // The current borrower drains the queue when it finishes.
            return;
        }
    }
}

pub(crate) fn on_key_down(event: KeyboardEvent) {
    let key = KeyInput::new(event.key(), event.shift_key());
    if with_controller(|controller| controller.handle_key_down(&key)) == Some(KeyResponse::Handled)
    {
        event.prevent_default();
    }
    drain_navigation();
}

pub(crate) fn on_key_up(event: KeyboardEvent) {
    let key = KeyInput::new(event.key(), event.shift_key());
    if with_controller(|controller| controller.handle_key_up(&key)) == Some(KeyResponse::Handled) {
        event.prevent_default();
    }
}
