//! Activation state machine and key handling.
//!
//! [`InputController`] is the only owner of the cursor. Navigation signals feed
//! [`InputController::sync_activation`]; key events feed
//! [`InputController::handle_key_down`] and [`InputController::handle_key_up`].
//!
//! | state | page matches | page does not match |
//! |---|---|---|
//! | `Inactive` | attach, listen, refresh → `Active` | detach (no-op) |
//! | `Active` | refresh only → `Active` | unlisten, detach → `Inactive` |

use crate::{
    ActionDispatcher, Command, CursorState, Direction, EventSynthesizer, GridLocator, JumpMode,
    KeyInput, KeyTable, NavConfig, scan_to_transition,
};

/// Page-side effects of the controller besides grid reads and input synthesis.
///
/// Every method must be safe to call redundantly: detaching an absent
/// indicator or unlistening while not listening does nothing.
pub trait Overlay<C> {
    /// Returns `true` if the cursor indicator is in the document.
    fn indicator_attached(&self) -> bool;

    /// Inserts the cursor indicator into the document.
    fn attach_indicator(&mut self);

    /// Removes the cursor indicator from the document.
    fn detach_indicator(&mut self);

    /// Moves the cursor indicator over `cell`.
    fn place_indicator(&mut self, cell: &C);

    /// Returns `true` if key listeners are registered.
    fn keys_listening(&self) -> bool;

    /// Registers the key-down and key-up listeners.
    fn listen_keys(&mut self);

    /// Unregisters the key-down and key-up listeners.
    fn unlisten_keys(&mut self);
}

/// Whether the overlay is attached and listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum ActivationState {
    /// Detached; key events are ignored.
    #[default]
    Inactive,
    /// Attached; key events drive the cursor.
    Active,
}

/// Decides whether a page path is a game page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMatcher {
    path_prefix: String,
}

impl PageMatcher {
    /// Creates a matcher for paths starting with `path_prefix`.
    #[must_use]
    pub fn new(path_prefix: impl Into<String>) -> Self {
        Self {
            path_prefix: path_prefix.into(),
        }
    }

    /// Returns `true` if `path` is a game page.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.path_prefix)
    }
}

/// Whether the page should keep its default handling of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum KeyResponse {
    /// The key was consumed; the caller should prevent the default action.
    Handled,
    /// The key is not ours; leave it to the page.
    Ignored,
}

/// Drives the cursor, the scanner and the dispatcher from key and navigation
/// events.
#[derive(Debug)]
pub struct InputController<G, S, O> {
    state: ActivationState,
    cursor: CursorState,
    key_table: KeyTable,
    jump_mode: JumpMode,
    dispatcher: ActionDispatcher,
    matcher: PageMatcher,
    grid: G,
    synth: S,
    overlay: O,
}

impl<G, S, O> InputController<G, S, O>
where
    G: GridLocator,
    S: EventSynthesizer<G::Cell>,
    O: Overlay<G::Cell>,
{
    /// Creates an inactive controller with the default key table.
    #[must_use]
    pub fn new(config: &NavConfig, grid: G, synth: S, overlay: O) -> Self {
        Self {
            state: ActivationState::Inactive,
            cursor: CursorState::new(),
            key_table: KeyTable::default(),
            jump_mode: config.jump_mode,
            dispatcher: ActionDispatcher::new(config.flag_policy),
            matcher: PageMatcher::new(config.path_prefix.clone()),
            grid,
            synth,
            overlay,
        }
    }

    /// Replaces the key table.
    #[must_use]
    pub fn with_key_table(mut self, key_table: KeyTable) -> Self {
        self.key_table = key_table;
        self
    }

    /// Returns the activation state.
    #[must_use]
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Returns the cursor.
    #[must_use]
    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Returns the key table.
    #[must_use]
    pub fn key_table(&self) -> &KeyTable {
        &self.key_table
    }

    /// Returns the grid collaborator.
    #[must_use]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Returns the grid collaborator mutably.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    /// Returns the input synthesizer.
    #[must_use]
    pub fn synthesizer(&self) -> &S {
        &self.synth
    }

    /// Returns the input synthesizer mutably.
    pub fn synthesizer_mut(&mut self) -> &mut S {
        &mut self.synth
    }

    /// Returns the overlay.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Re-evaluates the page predicate for `path` and applies the transition.
    ///
    /// Safe to call on every navigation signal; repeated calls on the same
    /// page never register listeners twice.
    pub fn sync_activation(&mut self, path: &str) -> ActivationState {
        if self.matcher.matches(path) {
            self.activate();
        } else {
            log::debug!("{path} is not a game page");
            self.deactivate();
        }
        self.state
    }

    fn activate(&mut self) {
        if !self.overlay.indicator_attached() {
            self.overlay.attach_indicator();
        }
        if !self.overlay.keys_listening() {
            self.overlay.listen_keys();
        }
        if self.state.is_inactive() {
            log::info!("game page detected, activating");
            self.state = ActivationState::Active;
        }
        self.refresh();
    }

    /// Unregisters listeners and removes the indicator.
    pub fn deactivate(&mut self) {
        self.overlay.unlisten_keys();
        self.overlay.detach_indicator();
        if self.state.is_active() {
            log::info!("left game page, deactivating");
            self.state = ActivationState::Inactive;
        }
    }

    /// Handles a key-down event.
    ///
    /// While active, the board is re-located and the indicator repositioned
    /// after every key, since a dispatched action may have changed the grid.
    pub fn handle_key_down(&mut self, key: &KeyInput) -> KeyResponse {
        if self.state.is_inactive() {
            return KeyResponse::Ignored;
        }
        log::trace!("key pressed: {} (shift={})", key.key, key.shift);

        let response = match self.key_table.command(&key.key) {
            Some(command) => {
                self.apply(command, key.shift);
                KeyResponse::Handled
            }
            None => KeyResponse::Ignored,
        };
        self.refresh();
        response
    }

    /// Handles a key-up event.
    ///
    /// Recognized keys are reported as handled so the page does not scroll or
    /// select on key repeat.
    #[must_use]
    pub fn handle_key_up(&self, key: &KeyInput) -> KeyResponse {
        if self.state.is_active() && self.key_table.recognizes(&key.key) {
            KeyResponse::Handled
        } else {
            KeyResponse::Ignored
        }
    }

    fn apply(&mut self, command: Command, shift: bool) {
        match command {
            Command::Step(direction) => self.cursor.step(direction),
            Command::Jump(direction) => self.jump(direction, shift),
            Command::Act(action) => {
                let pos = self.cursor.position();
                if let Err(err) = self
                    .dispatcher
                    .dispatch(action, &self.grid, &mut self.synth, pos)
                {
                    log::debug!("{action} skipped: {err}");
                }
            }
        }
    }

    fn jump(&mut self, direction: Direction, shift: bool) {
        match (self.jump_mode, shift) {
            (JumpMode::Transition, true) => {
                let Some(bounds) = self.cursor.bounds() else {
                    return;
                };
                let target =
                    scan_to_transition(&self.grid, bounds, self.cursor.position(), direction);
                self.cursor.move_to(target.x.into(), target.y.into());
            }
            (JumpMode::Transition, false) | (JumpMode::Edge, _) => {
                self.cursor.snap_to_edge(direction);
            }
        }
    }

    /// Re-locates the board and moves the indicator over the cursor cell.
    pub fn refresh(&mut self) {
        let bounds = self.grid.locate();
        match bounds {
            Some(bounds) => log::debug!(
                "board size detected: max_x={}, max_y={}",
                bounds.max_x,
                bounds.max_y
            ),
            None => log::debug!("no cells found to determine board size"),
        }
        self.cursor.set_bounds(bounds);

        let pos = self.cursor.position();
        match self.grid.cell_at(pos) {
            Some(cell) => {
                self.overlay.place_indicator(&cell);
                log::debug!("indicator moved to {pos}");
            }
            None => log::debug!("no cell at {pos} to place the indicator over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FlagPolicy, Position,
        testing::{FakeGrid, FakeOverlay, RecordingSynthesizer},
    };

    type TestController = InputController<FakeGrid, RecordingSynthesizer, FakeOverlay>;

    fn controller(diagram: &str, config: &NavConfig) -> TestController {
        InputController::new(
            config,
            diagram.parse().expect("valid board diagram"),
            RecordingSynthesizer::default(),
            FakeOverlay::default(),
        )
    }

    fn press(controller: &mut TestController, keys: &[&str]) {
        for key in keys {
            let shift = key.chars().all(char::is_uppercase);
            controller.handle_key_down(&KeyInput::new(*key, shift));
        }
    }

    #[test]
    fn test_page_matcher() {
        let matcher = PageMatcher::new("/game/");
        assert!(matcher.matches("/game/123"));
        assert!(matcher.matches("/game/"));
        assert!(!matcher.matches("/game"));
        assert!(!matcher.matches("/"));
        assert!(!matcher.matches("/games/1"));
    }

    #[test]
    fn test_starts_inactive_and_ignores_keys() {
        let mut controller = controller("###", &NavConfig::default());
        assert_eq!(controller.state(), ActivationState::Inactive);
        assert_eq!(
            controller.handle_key_down(&KeyInput::plain("l")),
            KeyResponse::Ignored
        );
        assert_eq!(controller.cursor().position(), Position::ORIGIN);
        assert!(!controller.overlay().attached);
    }

    #[test]
    fn test_activation_attaches_and_places_indicator() {
        let mut controller = controller("###\n###", &NavConfig::default());
        assert_eq!(controller.sync_activation("/game/1"), ActivationState::Active);
        let overlay = controller.overlay();
        assert!(overlay.attached);
        assert!(overlay.listening);
        assert_eq!(overlay.placed_over, Some(Position::ORIGIN));
        assert!(controller.cursor().bounds().is_some());
    }

    #[test]
    fn test_reentry_is_idempotent() {
        let mut controller = controller("###", &NavConfig::default());
        controller.sync_activation("/game/1");
        controller.sync_activation("/game/1");
        controller.sync_activation("/game/2");
        assert_eq!(controller.overlay().listen_count, 1);
        assert_eq!(controller.overlay().attach_count, 1);
    }

    #[test]
    fn test_deactivate_twice_is_harmless() {
        let mut controller = controller("###", &NavConfig::default());
        controller.sync_activation("/game/1");
        controller.sync_activation("/");
        controller.sync_activation("/about");
        assert_eq!(controller.state(), ActivationState::Inactive);
        assert!(!controller.overlay().attached);
        assert!(!controller.overlay().listening);
    }

    #[test]
    fn test_reactivation_registers_again() {
        let mut controller = controller("###", &NavConfig::default());
        controller.sync_activation("/game/1");
        controller.sync_activation("/");
        controller.sync_activation("/game/1");
        assert_eq!(controller.overlay().listen_count, 2);
        assert!(controller.overlay().listening);
    }

    #[test]
    fn test_unrecognized_key_is_ignored_but_refreshes() {
        let mut controller = controller("###", &NavConfig::default());
        controller.sync_activation("/game/1");
        *controller.grid_mut() = "#####".parse().unwrap();
        assert_eq!(
            controller.handle_key_down(&KeyInput::plain("x")),
            KeyResponse::Ignored
        );
        assert_eq!(controller.cursor().bounds().map(|b| b.max_x), Some(4));
    }

    #[test]
    fn test_key_up_suppression() {
        let mut controller = controller("###", &NavConfig::default());
        assert!(controller.handle_key_up(&KeyInput::plain("d")).is_ignored());
        controller.sync_activation("/game/1");
        for key in ["d", "f", "c", "ArrowLeft", "h", "L"] {
            assert!(controller.handle_key_up(&KeyInput::plain(key)).is_handled());
        }
        assert!(controller.handle_key_up(&KeyInput::plain("x")).is_ignored());
    }

    #[test]
    fn test_edge_mode_jumps_to_edges() {
        let config = NavConfig {
            jump_mode: JumpMode::Edge,
            ..NavConfig::default()
        };
        let mut controller = controller(
            "
            ..##
            ..##
            ..##
            ",
            &config,
        );
        controller.sync_activation("/game/1");
        press(&mut controller, &["L"]);
        assert_eq!(controller.cursor().position(), Position::new(3, 0));
        press(&mut controller, &["J"]);
        assert_eq!(controller.cursor().position(), Position::new(3, 2));
        press(&mut controller, &["H", "K"]);
        assert_eq!(controller.cursor().position(), Position::ORIGIN);
    }

    #[test]
    fn test_transition_mode_without_shift_jumps_to_edge() {
        let mut controller = controller("..##", &NavConfig::default());
        controller.sync_activation("/game/1");
        controller.handle_key_down(&KeyInput::plain("L"));
        assert_eq!(controller.cursor().position(), Position::new(3, 0));
        controller.handle_key_down(&KeyInput::shifted("H"));
        assert_eq!(controller.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_actions_use_cursor_cell() {
        let config = NavConfig {
            flag_policy: FlagPolicy::PressOnly,
            ..NavConfig::default()
        };
        let mut controller = controller(".#", &config);
        controller.sync_activation("/game/1");
        press(&mut controller, &["c", "f", "l", "c", "f", "d"]);
        let events = controller.synthesizer().events();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_unknown_bounds_keep_cursor_still() {
        let mut controller = controller("___", &NavConfig::default());
        controller.sync_activation("/game/1");
        assert_eq!(controller.cursor().bounds(), None);
        press(&mut controller, &["l", "j", "L", "d"]);
        assert_eq!(controller.cursor().position(), Position::ORIGIN);
        assert!(controller.synthesizer().events().is_empty());
        assert_eq!(controller.overlay().placed_over, None);
    }

    #[test]
    fn test_cells_appearing_later_enable_movement() {
        let mut controller = controller("___", &NavConfig::default());
        controller.sync_activation("/game/1");
        *controller.grid_mut() = FakeGrid::closed(9, 9);
        press(&mut controller, &["l"]);
        assert_eq!(controller.cursor().position(), Position::ORIGIN);
        press(&mut controller, &["l"]);
        assert_eq!(controller.cursor().position(), Position::new(1, 0));
    }
}
