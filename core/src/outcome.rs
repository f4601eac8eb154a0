use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win(_) | Self::Draw)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(player),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Scans all eight lines of `board` and classifies the position.
///
/// Every line is checked for a winner before a draw is concluded, so a move
/// that both completes a line and fills the board is a win.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    let mut winner = None;
    let mut all_lines_full = true;

    for line in &LINES {
        let cells = board.line_cells(line);

        if cells.iter().all(|&cell| cell == Cell::X) {
            winner = Some(Player::X);
        }
        if cells.iter().all(|&cell| cell == Cell::O) {
            winner = Some(Player::O);
        }
        if all_lines_full && cells.iter().any(|cell| cell.is_empty()) {
            all_lines_full = false;
        }
    }

    match (winner, all_lines_full) {
        (Some(player), _) => Outcome::Win(player),
        (None, true) => Outcome::Draw,
        (None, false) => Outcome::InProgress,
    }
}
