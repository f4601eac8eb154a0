use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

const SHAPE: [usize; 2] = [BOARD_SIZE as usize, BOARD_SIZE as usize];

/// A 3x3 grid of cells, row-major.
///
/// Boards are values: placing a mark yields a new board and leaves the old
/// one as it was. A cell only ever goes from empty to a mark.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default(SHAPE),
        }
    }

    /// Builds a board from rows of cells, mostly useful to set up positions.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        Self {
            cells: Array2::from_shape_fn(SHAPE, |(row, col)| rows[row][col]),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        in_bounds(coords).then(|| self.cells[coords.to_nd_index()])
    }

    /// Returns a copy of this board with `player`'s mark at `coords`.
    pub fn with_mark(&self, coords: Coord2, player: Player) -> Result<Self> {
        let current = self.cell_at(coords).ok_or(GameError::InvalidCoords)?;
        if !current.is_empty() {
            return Err(GameError::InvalidMove);
        }

        let mut cells = self.cells.clone();
        cells[coords.to_nd_index()] = player.into();
        Ok(Self { cells })
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// The three cells of `line`, in the order the line lists them.
    pub fn line_cells(&self, line: &[Coord2; 3]) -> [Cell; 3] {
        line.map(|coords| self[coords])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        if cells.shape() != SHAPE {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
