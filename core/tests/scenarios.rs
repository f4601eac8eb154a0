#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

use tictactoe_core::*;

fn play(moves: &[Coord2]) -> GameState {
    moves
        .iter()
        .try_fold(GameState::new(), |state, &coords| state.apply_move(coords))
        .expect("all moves should be valid")
}

#[test]
fn top_row_wins_for_x() {
    let state = play(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(state.outcome(), Outcome::Win(Player::X));
    assert_eq!(evaluate_outcome(state.board()), Outcome::Win(Player::X));
}

#[test]
fn draw_layout_from_rows_is_draw() {
    use Cell::{O, X};
    let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);

    assert_eq!(evaluate_outcome(&board), Outcome::Draw);
}

#[test]
fn game_played_to_draw_ends_in_draw() {
    // X O X
    // X O O
    // O X X
    let state = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 2),
        (2, 2),
    ]);

    assert_eq!(state.outcome(), Outcome::Draw);
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.apply_move((0, 0)), Err(GameError::AlreadyEnded));
}

#[test]
fn last_move_completing_a_line_wins_over_draw() {
    // X O X
    // O X O
    // O X X  <- final X at (2, 2) fills the board and the diagonal
    let state = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);

    assert!(state.board().is_full());
    assert_eq!(state.outcome(), Outcome::Win(Player::X));
}

#[test]
fn occupied_center_is_invalid_and_changes_nothing() {
    let state = play(&[(1, 1)]);
    let board_before = state.board().clone();

    assert_eq!(state.apply_move((1, 1)), Err(GameError::InvalidMove));
    assert_eq!(state.board(), &board_before);
    assert_eq!(state.turn(), Player::O);
}

#[test]
fn turns_alternate_until_the_game_ends() {
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];
    let mut state = GameState::new();

    for (index, &coords) in moves.iter().enumerate() {
        let expected = if index % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(state.turn(), expected);
        assert_eq!(state.cell_at(coords), Some(Cell::Empty));

        state = state.apply_move(coords).unwrap();
        assert_eq!(state.cell_at(coords), Some(Cell::from(expected)));
    }

    assert!(state.is_finished());
}
