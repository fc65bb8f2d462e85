//! Core navigation model for keyboard-driven grid minigames.
//!
//! This crate owns everything that does not depend on a concrete host page:
//! the cursor and board bounds, the boundary scanner, the mapping from keys to
//! commands, the translation of game actions into synthetic pointer input, and
//! the activation state machine that ties them together.
//!
//! # Overview
//!
//! The host page is reached only through three trait seams:
//!
//! - [`GridLocator`]: reads cell coordinates and markers (the "read" side).
//! - [`EventSynthesizer`]: sends synthetic pointer input to a cell (the "write" side).
//! - [`Overlay`]: attaches the cursor indicator and the key listeners.
//!
//! [`InputController`] owns the [`CursorState`] and drives those seams in
//! response to key and navigation events.
//!
//! # Examples
//!
//! ```
//! use minenav_core::{
//!     ActivationState, InputController, KeyInput, NavConfig, Position,
//!     testing::{FakeGrid, FakeOverlay, RecordingSynthesizer},
//! };
//!
//! let grid: FakeGrid = "
//!     ..##
//!     ..##
//! "
//! .parse()
//! .unwrap();
//! let mut controller = InputController::new(
//!     &NavConfig::default(),
//!     grid,
//!     RecordingSynthesizer::default(),
//!     FakeOverlay::default(),
//! );
//!
//! assert_eq!(controller.sync_activation("/game/42"), ActivationState::Active);
//! controller.handle_key_down(&KeyInput::shifted("L"));
//! assert_eq!(controller.cursor().position(), Position::new(2, 0));
//! ```

pub mod cell;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod dispatch;
pub mod grid;
pub mod keymap;
pub mod position;
pub mod scanner;
pub mod testing;

// Re-export commonly used types
pub use self::{
    cell::{CellMarkers, Classification},
    config::NavConfig,
    controller::{ActivationState, InputController, KeyResponse, Overlay, PageMatcher},
    cursor::CursorState,
    dispatch::{ActionDispatcher, DispatchError, EventSynthesizer, FlagPolicy, MouseButton},
    grid::{GridLocator, parse_coordinate},
    keymap::{Command, GameAction, JumpMode, KeyBinding, KeyInput, KeyTable},
    position::{Axis, Direction, GridBounds, Position},
    scanner::scan_to_transition,
};
