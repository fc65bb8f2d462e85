//! End-to-end key sequences against an in-memory board.

use minenav_core::{
    ActivationState, CellMarkers, FlagPolicy, InputController, KeyInput, KeyResponse, MouseButton,
    NavConfig, Position,
    testing::{FakeGrid, FakeOverlay, RecordingSynthesizer, SyntheticEvent},
};

type Controller = InputController<FakeGrid, RecordingSynthesizer, FakeOverlay>;

fn active_controller(grid: FakeGrid, config: &NavConfig) -> Controller {
    let mut controller = InputController::new(
        config,
        grid,
        RecordingSynthesizer::default(),
        FakeOverlay::default(),
    );
    assert_eq!(controller.sync_activation("/game/1"), ActivationState::Active);
    controller
}

fn move_to(controller: &mut Controller, target: Position) {
    for _ in 0..target.x {
        controller.handle_key_down(&KeyInput::plain("l"));
    }
    for _ in 0..target.y {
        controller.handle_key_down(&KeyInput::plain("j"));
    }
    assert_eq!(controller.cursor().position(), target);
}

/// A 9×9 board whose row 4 is revealed up to column 4 and closed after it.
fn row_four_board() -> FakeGrid {
    let mut grid = FakeGrid::closed(9, 9);
    for x in 0..=4 {
        grid.set(Position::new(x, 4), CellMarkers::REVEALED);
    }
    grid
}

#[test]
fn scenario_a_single_steps() {
    let mut controller = active_controller(FakeGrid::closed(9, 9), &NavConfig::default());
    for _ in 0..3 {
        assert_eq!(
            controller.handle_key_down(&KeyInput::plain("l")),
            KeyResponse::Handled
        );
    }
    assert_eq!(controller.cursor().position(), Position::new(3, 0));
    assert_eq!(controller.overlay().placed_over, Some(Position::new(3, 0)));
}

#[test]
fn scenario_b_transition_jump_stops_at_first_differing_cell() {
    let mut controller = active_controller(row_four_board(), &NavConfig::default());
    move_to(&mut controller, Position::new(4, 4));
    controller.handle_key_down(&KeyInput::shifted("L"));
    assert_eq!(controller.cursor().position(), Position::new(5, 4));
}

#[test]
fn scenario_c_transition_jump_at_edge_stays() {
    let mut controller = active_controller(row_four_board(), &NavConfig::default());
    move_to(&mut controller, Position::new(8, 4));
    controller.handle_key_down(&KeyInput::shifted("L"));
    assert_eq!(controller.cursor().position(), Position::new(8, 4));
}

#[test]
fn scenario_d_flag_closed_cell() {
    let policies = [
        (FlagPolicy::PressOnly, 1),
        (FlagPolicy::PressThenContextMenu, 2),
    ];
    for (flag_policy, expected_len) in policies {
        let config = NavConfig {
            flag_policy,
            ..NavConfig::default()
        };
        let mut controller = active_controller(FakeGrid::closed(3, 3), &config);
        controller.handle_key_down(&KeyInput::plain("f"));

        let events = controller.synthesizer().events();
        assert_eq!(events.len(), expected_len, "{flag_policy:?}");
        assert_eq!(
            events[0],
            SyntheticEvent::Press {
                cell: Position::ORIGIN,
                button: MouseButton::Secondary,
            }
        );
        if expected_len == 2 {
            assert_eq!(
                events[1],
                SyntheticEvent::ContextMenu {
                    cell: Position::ORIGIN
                }
            );
        }
    }
}

#[test]
fn scenario_d_already_flagged_cell_gets_no_context_menu() {
    let mut grid = FakeGrid::closed(3, 3);
    grid.set(Position::ORIGIN, CellMarkers::CLOSED | CellMarkers::FLAGGED);
    let mut controller = active_controller(grid, &NavConfig::default());
    controller.handle_key_down(&KeyInput::plain("f"));
    assert_eq!(
        controller.synthesizer().events(),
        [SyntheticEvent::Press {
            cell: Position::ORIGIN,
            button: MouseButton::Secondary,
        }]
    );
}

#[test]
fn scenario_e_leaving_the_game_page() {
    let mut controller = active_controller(FakeGrid::closed(9, 9), &NavConfig::default());
    assert!(controller.overlay().attached);

    assert_eq!(controller.sync_activation("/"), ActivationState::Inactive);
    assert!(!controller.overlay().attached);
    assert!(!controller.overlay().listening);

    for key in ["d", "f", "c", "l", "L"] {
        assert_eq!(
            controller.handle_key_down(&KeyInput::plain(key)),
            KeyResponse::Ignored
        );
    }
    assert!(controller.synthesizer().events().is_empty());
    assert_eq!(controller.cursor().position(), Position::ORIGIN);
}

#[test]
fn repeated_navigation_signals_register_one_listener_set() {
    let mut controller = active_controller(FakeGrid::closed(9, 9), &NavConfig::default());
    controller.sync_activation("/game/1");
    assert_eq!(controller.overlay().listen_count, 1);

    controller.handle_key_down(&KeyInput::plain("d"));
    assert_eq!(controller.synthesizer().events().len(), 1);
}

#[test]
fn smaller_board_reclamps_cursor_on_next_key() {
    let mut controller = active_controller(FakeGrid::closed(9, 9), &NavConfig::default());
    move_to(&mut controller, Position::new(8, 8));

    // New game with a smaller board.
    *controller.grid_mut() = FakeGrid::closed(4, 4);
    controller.handle_key_down(&KeyInput::plain("d"));
    assert_eq!(controller.cursor().position(), Position::new(3, 3));
    assert_eq!(controller.overlay().placed_over, Some(Position::new(3, 3)));
}
