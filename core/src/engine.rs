use serde::{Deserialize, Serialize};

use crate::*;

/// Snapshot of one game: the board, whose turn it is and how the game stands.
///
/// Snapshots are never mutated; [`GameState::apply_move`] returns the next one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Outcome,
    move_count: u8,
}

impl GameState {
    /// A fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: Outcome::InProgress,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.board.cell_at(coords)
    }

    /// Whether a click on `coords` could place a mark right now.
    pub fn can_play_at(&self, coords: Coord2) -> bool {
        !self.is_finished() && self.cell_at(coords).is_some_and(Cell::is_empty)
    }

    /// Places the current player's mark at `coords` and returns the next state.
    ///
    /// `self` is left as it was whether or not the move is accepted.
    pub fn apply_move(&self, coords: Coord2) -> Result<Self> {
        if !in_bounds(coords) {
            log::trace!("move at {:?} rejected: out of range", coords);
            return Err(GameError::InvalidCoords);
        }
        if self.is_finished() {
            log::trace!("move at {:?} rejected: game over", coords);
            return Err(GameError::AlreadyEnded);
        }

        let board = self.board.with_mark(coords, self.turn).inspect_err(|_| {
            log::trace!("move at {:?} rejected: cell taken", coords);
        })?;
        let outcome = evaluate_outcome(&board);
        let next = Self {
            board,
            turn: self.turn.opponent(),
            outcome,
            move_count: self.move_count + 1,
        };

        log::debug!(
            "move {}: {} at {:?} -> {:?}",
            next.move_count,
            self.turn,
            coords,
            outcome
        );
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
