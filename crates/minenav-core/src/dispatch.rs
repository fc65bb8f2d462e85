//! Translates game actions into synthetic pointer input.

use crate::{CellMarkers, Classification, GameAction, GridLocator, Position};

/// A pointer button, with the DOM encodings the host expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MouseButton {
    /// Left button; reveals.
    #[display("primary")]
    Primary,
    /// Wheel button; chords.
    #[display("middle")]
    Middle,
    /// Right button; flags.
    #[display("secondary")]
    Secondary,
}

impl MouseButton {
    /// Value of `MouseEvent.button`.
    #[must_use]
    pub const fn button(self) -> i16 {
        match self {
            MouseButton::Primary => 0,
            MouseButton::Middle => 1,
            MouseButton::Secondary => 2,
        }
    }

    /// Value of `MouseEvent.buttons` while this button is held.
    #[must_use]
    pub const fn buttons(self) -> u16 {
        match self {
            MouseButton::Primary => 1,
            MouseButton::Middle => 4,
            MouseButton::Secondary => 2,
        }
    }
}

/// The "write" side of the host grid.
pub trait EventSynthesizer<C> {
    /// Sends a press immediately followed by a release of `button` on `cell`.
    fn send_press(&mut self, cell: &C, button: MouseButton);

    /// Sends a context-menu event on `cell`.
    fn send_context_menu(&mut self, cell: &C);
}

/// Which input sequence flags a cell.
///
/// Hosts differ in whether they toggle flags on the secondary button release
/// or on the context-menu signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagPolicy {
    /// Secondary press/release, then a context-menu event if the cell does not
    /// carry a flag yet.
    #[default]
    PressThenContextMenu,
    /// Secondary press/release only.
    PressOnly,
    /// A context-menu event only.
    ContextMenuOnly,
}

/// Why an action sent no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DispatchError {
    /// No cell exists under the cursor.
    #[display("no cell at {_0}")]
    CellNotFound(#[error(not(source))] Position),
    /// The cell exists but the action does not apply to it.
    #[display("cannot {action} {classification} cell at {position}")]
    NotApplicable {
        /// The requested action.
        action: GameAction,
        /// The cell position.
        position: Position,
        /// The cell's classification.
        classification: Classification,
    },
}

/// Sends reveal, chord and flag input to the cell under the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionDispatcher {
    flag_policy: FlagPolicy,
}

impl ActionDispatcher {
    /// Creates a dispatcher using `flag_policy` for flags.
    #[must_use]
    pub const fn new(flag_policy: FlagPolicy) -> Self {
        Self { flag_policy }
    }

    /// Returns the configured flag policy.
    #[must_use]
    pub const fn flag_policy(&self) -> FlagPolicy {
        self.flag_policy
    }

    /// Runs `action` at `pos`.
    ///
    /// # Errors
    ///
    /// See [`reveal`](Self::reveal), [`chord`](Self::chord) and [`flag`](Self::flag).
    pub fn dispatch<G, S>(
        &self,
        action: GameAction,
        grid: &G,
        synth: &mut S,
        pos: Position,
    ) -> Result<(), DispatchError>
    where
        G: GridLocator + ?Sized,
        S: EventSynthesizer<G::Cell> + ?Sized,
    {
        match action {
            GameAction::Reveal => self.reveal(grid, synth, pos),
            GameAction::Chord => self.chord(grid, synth, pos),
            GameAction::Flag => self.flag(grid, synth, pos),
        }
    }

    /// Sends a primary press/release regardless of the cell state.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CellNotFound`] if there is no cell at `pos`.
    pub fn reveal<G, S>(&self, grid: &G, synth: &mut S, pos: Position) -> Result<(), DispatchError>
    where
        G: GridLocator + ?Sized,
        S: EventSynthesizer<G::Cell> + ?Sized,
    {
        let cell = grid.cell_at(pos).ok_or(DispatchError::CellNotFound(pos))?;
        synth.send_press(&cell, MouseButton::Primary);
        log::debug!("revealed cell at {pos}");
        Ok(())
    }

    /// Sends a middle press/release if the cell is revealed.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CellNotFound`] if there is no cell at `pos`, or
    /// [`DispatchError::NotApplicable`] if the cell is not revealed.
    pub fn chord<G, S>(&self, grid: &G, synth: &mut S, pos: Position) -> Result<(), DispatchError>
    where
        G: GridLocator + ?Sized,
        S: EventSynthesizer<G::Cell> + ?Sized,
    {
        let cell = grid.cell_at(pos).ok_or(DispatchError::CellNotFound(pos))?;
        let classification = grid.classify(&cell);
        if classification != Classification::Revealed {
            return Err(DispatchError::NotApplicable {
                action: GameAction::Chord,
                position: pos,
                classification,
            });
        }
        synth.send_press(&cell, MouseButton::Middle);
        log::debug!("chorded cell at {pos}");
        Ok(())
    }

    /// Sends the configured flag sequence if the cell is closed.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CellNotFound`] if there is no cell at `pos`, or
    /// [`DispatchError::NotApplicable`] if the cell is not closed.
    pub fn flag<G, S>(&self, grid: &G, synth: &mut S, pos: Position) -> Result<(), DispatchError>
    where
        G: GridLocator + ?Sized,
        S: EventSynthesizer<G::Cell> + ?Sized,
    {
        let cell = grid.cell_at(pos).ok_or(DispatchError::CellNotFound(pos))?;
        let markers = grid.markers(&cell);
        let classification = Classification::from_markers(markers);
        if classification != Classification::Closed {
            return Err(DispatchError::NotApplicable {
                action: GameAction::Flag,
                position: pos,
                classification,
            });
        }

        match self.flag_policy {
            FlagPolicy::PressThenContextMenu => {
                synth.send_press(&cell, MouseButton::Secondary);
                // The press may already have toggled the flag on some hosts.
                if !grid.markers(&cell).contains(CellMarkers::FLAGGED) {
                    synth.send_context_menu(&cell);
                }
            }
            FlagPolicy::PressOnly => synth.send_press(&cell, MouseButton::Secondary),
            FlagPolicy::ContextMenuOnly => synth.send_context_menu(&cell),
        }
        log::debug!("flag toggled on cell at {pos} ({:?})", self.flag_policy);
        Ok(())
    }
}
