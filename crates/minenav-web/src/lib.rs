//! Browser content script for Minenav.
//!
//! Attaches the keyboard navigation overlay to game pages. The DOM adapters in
//! this crate implement the traits of [`minenav_core`]; everything else is
//! wiring between browser events and the controller.
//!
//! The content script starts with the default configuration. Hosts that use
//! different markup call `configure` with a partial [`WebConfig`] object:
//!
//! ```js
//! configure({ jumpMode: "edge", selectors: { cell: "div.tile" } });
//! ```
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod version;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod overlay;

pub use config::{GridSelectors, WebConfig};

/// Failures talking to the browser.
///
/// These are logged and never surfaced to the page.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WebError {
    /// There is no global `window`.
    #[display("no window")]
    NoWindow,
    /// The window has no document.
    #[display("no document")]
    NoDocument,
    /// A created element did not have the expected type.
    #[display("created element is not an HTMLElement")]
    NotAnHtmlElement,
    /// The controller is handling another event.
    #[display("controller is busy")]
    Busy,
    /// A DOM call threw.
    #[display("{context} failed: {message}")]
    Js {
        /// The failing call.
        context: String,
        /// The thrown value, formatted.
        message: String,
    },
}

#[cfg(target_arch = "wasm32")]
impl WebError {
    pub(crate) fn js(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        WebError::Js {
            context: context.to_owned(),
            message,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;

    use crate::{WebConfig, app, logger};

    /// Installs logging and the default controller when the module loads.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Debug).ok();

        log::info!(
            "Starting Minenav content script, version={}",
            crate::version::build_version()
        );

        if let Err(err) = app::listen_navigation() {
            log::warn!("navigation listeners not installed: {err}");
        }
        if let Err(err) = app::install(&WebConfig::default()) {
            log::warn!("controller not installed: {err}");
        }
    }

    /// Replaces the controller with one built from `options`.
    ///
    /// `options` is a plain object with any subset of the [`WebConfig`] keys.
    #[wasm_bindgen]
    pub fn configure(options: JsValue) -> Result<(), JsValue> {
        let config = if options.is_undefined() || options.is_null() {
            WebConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<WebConfig>(options)?
        };
        log::debug!("configuring with {config:?}");
        app::install(&config).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use entry::{configure, start};
