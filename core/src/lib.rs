#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use lines::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod lines;
mod session;
mod types;

/// One 3x3 board snapshot, cells in row-major order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn validate_cell(&self, cell: CellIx) -> Result<CellIx> {
        if (cell as usize) < CELL_COUNT {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn cell_at(&self, cell: CellIx) -> Cell {
        self.cells[cell as usize]
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub(crate) fn place(&mut self, cell: CellIx, mark: Mark) {
        self.cells[cell as usize] = Cell::Taken(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<CellIx> for Board {
    type Output = Cell;

    fn index(&self, cell: CellIx) -> &Self::Output {
        &self.cells[cell as usize]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won,
    Tied,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Tied => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum JumpOutcome {
    NoChange,
    Jumped,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Jumped => true,
        }
    }
}
