//! Key script parsing.
//!
//! A script is a whitespace-separated list of items:
//!
//! - `@/path` re-evaluates the page identity for `/path`.
//! - `S-<key>` presses `<key>` with Shift held.
//! - A single capital letter is pressed with Shift held.
//! - Anything else is a `KeyboardEvent.key` value pressed without Shift.

use minenav_core::KeyInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptItem {
    Navigate(String),
    Key(KeyInput),
}

pub(crate) fn parse(script: &str) -> Vec<ScriptItem> {
    script.split_whitespace().map(parse_item).collect()
}

fn parse_item(token: &str) -> ScriptItem {
    if let Some(path) = token.strip_prefix('@') {
        return ScriptItem::Navigate(path.to_owned());
    }
    if let Some(key) = token.strip_prefix("S-").filter(|key| !key.is_empty()) {
        return ScriptItem::Key(KeyInput::shifted(key));
    }
    let mut chars = token.chars();
    let shift = matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_uppercase());
    ScriptItem::Key(KeyInput::new(token, shift))
}
