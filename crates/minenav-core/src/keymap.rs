//! Key table and the commands it maps to.

use crate::Direction;

/// A game action sent to the cell under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GameAction {
    /// Open the cell.
    #[display("reveal")]
    Reveal,
    /// Open the unflagged neighbors of a revealed cell.
    #[display("chord")]
    Chord,
    /// Toggle a flag on a closed cell.
    #[display("flag")]
    Flag,
}

/// What a recognized key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Command {
    /// Move one cell.
    Step(Direction),
    /// Jump to the edge or the next transition, depending on [`JumpMode`].
    Jump(Direction),
    /// Act on the cell under the cursor.
    Act(GameAction),
}

/// How [`Command::Jump`] moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JumpMode {
    /// Always jump straight to the board edge.
    Edge,
    /// Jump to the next cell of a different classification when Shift is
    /// held. Without Shift (caps lock) jump to the edge.
    #[default]
    Transition,
}

/// A key as reported by the host's key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Value of `KeyboardEvent.key`.
    pub key: String,
    /// Value of `KeyboardEvent.shiftKey`.
    pub shift: bool,
}

impl KeyInput {
    /// Creates a key input.
    #[must_use]
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }

    /// A key pressed without Shift.
    #[must_use]
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    /// A key pressed with Shift held.
    #[must_use]
    pub fn shifted(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }
}

/// One entry of a [`KeyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    /// Case-sensitive `KeyboardEvent.key` value.
    pub key: &'static str,
    /// The command the key triggers.
    pub command: Command,
}

impl KeyBinding {
    /// Creates a binding.
    #[must_use]
    pub const fn new(key: &'static str, command: Command) -> Self {
        Self { key, command }
    }

    const fn step(key: &'static str, direction: Direction) -> Self {
        Self::new(key, Command::Step(direction))
    }

    const fn jump(key: &'static str, direction: Direction) -> Self {
        Self::new(key, Command::Jump(direction))
    }

    const fn act(key: &'static str, action: GameAction) -> Self {
        Self::new(key, Command::Act(action))
    }
}

const DEFAULT_BINDINGS: [KeyBinding; 15] = [
    KeyBinding::step("ArrowUp", Direction::Up),
    KeyBinding::step("k", Direction::Up),
    KeyBinding::step("ArrowDown", Direction::Down),
    KeyBinding::step("j", Direction::Down),
    KeyBinding::step("ArrowLeft", Direction::Left),
    KeyBinding::step("h", Direction::Left),
    KeyBinding::step("ArrowRight", Direction::Right),
    KeyBinding::step("l", Direction::Right),
    KeyBinding::jump("K", Direction::Up),
    KeyBinding::jump("J", Direction::Down),
    KeyBinding::jump("H", Direction::Left),
    KeyBinding::jump("L", Direction::Right),
    KeyBinding::act("d", GameAction::Reveal),
    KeyBinding::act("c", GameAction::Chord),
    KeyBinding::act("f", GameAction::Flag),
];

/// The set of recognized keys.
///
/// Keys not in the table are left to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(DEFAULT_BINDINGS)
    }
}

impl KeyTable {
    /// Creates a table from bindings. Earlier bindings win on duplicate keys.
    #[must_use]
    pub fn new(bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Returns the bindings in lookup order.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Looks up the command bound to `key`.
    #[must_use]
    pub fn command(&self, key: &str) -> Option<Command> {
        self.bindings
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.command)
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn recognizes(&self, key: &str) -> bool {
        self.command(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_case_sensitive() {
        let table = KeyTable::default();
        assert_eq!(table.command("l"), Some(Command::Step(Direction::Right)));
        assert_eq!(table.command("L"), Some(Command::Jump(Direction::Right)));
        assert_eq!(table.command("D"), None);
        assert_eq!(table.command("F"), None);
        assert_eq!(table.command("f"), Some(Command::Act(GameAction::Flag)));
    }

    #[test]
    fn test_arrows_and_letters_agree() {
        let table = KeyTable::default();
        for (arrow, letter) in [
            ("ArrowUp", "k"),
            ("ArrowDown", "j"),
            ("ArrowLeft", "h"),
            ("ArrowRight", "l"),
        ] {
            assert_eq!(table.command(arrow), table.command(letter));
        }
    }

    #[test]
    fn test_custom_table() {
        let table = KeyTable::new([
            KeyBinding::new("w", Command::Step(Direction::Up)),
            KeyBinding::new("w", Command::Act(GameAction::Reveal)),
        ]);
        assert_eq!(table.command("w"), Some(Command::Step(Direction::Up)));
        assert!(!table.recognizes("k"));
    }
}
