use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Derived game status, kept as plain data so hosts can format or
/// localize it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NextTurn(Mark),
    Winner(Mark),
    Tie,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Winner(_) | Self::Tie)
    }
}

/// One immutable snapshot in the move history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<CellIx>,
}

impl HistoryEntry {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<CellIx> {
        self.last_move
    }

    /// 1-indexed `(row, col)` of the move, for move-list rendering.
    /// `None` for the initial entry.
    pub fn last_move_row_col(&self) -> Option<RowCol> {
        self.last_move.map(to_row_col)
    }
}

/// A game from the empty board onward, with time-travel over its own
/// move history.
///
/// The history grows one snapshot per move; jumping back and then
/// moving discards the stale future and starts a new branch. The side
/// to move is derived from the pointer parity, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    history: Vec<HistoryEntry>,
    pointer: usize,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                last_move: None,
            }],
            pointer: 0,
        }
    }

    /// The snapshot the pointer currently selects.
    pub fn board(&self) -> &Board {
        &self.history[self.pointer].board
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Side to move at the current pointer: X on even move numbers,
    /// O on odd ones.
    pub fn to_move(&self) -> Mark {
        if self.pointer % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn win_line(&self) -> Option<WinLine> {
        find_win(self.board())
    }

    pub fn is_tie(&self) -> bool {
        self.win_line().is_none() && self.board().is_full()
    }

    pub fn status(&self) -> Status {
        if let Some(win) = self.win_line() {
            Status::Winner(win.mark())
        } else if self.board().is_full() {
            Status::Tie
        } else {
            Status::NextTurn(self.to_move())
        }
    }

    /// Places the current side's mark at `cell`.
    ///
    /// Moves on an occupied cell or on a decided board are no-ops
    /// reported as `NoChange`; only an out-of-bounds index is an error.
    pub fn make_move(&mut self, cell: CellIx) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        let cell = self.board().validate_cell(cell)?;

        if find_win(self.board()).is_some() || !self.board()[cell].is_empty() {
            return Ok(NoChange);
        }

        let mark = self.to_move();
        let mut next = *self.board();
        next.place(cell, mark);

        let stale = self.history.len() - (self.pointer + 1);
        if stale > 0 {
            log::trace!("discarding {} stale future entries", stale);
            self.history.truncate(self.pointer + 1);
        }
        self.history.push(HistoryEntry {
            board: next,
            last_move: Some(cell),
        });
        self.pointer = self.history.len() - 1;
        log::debug!("{:?} placed at {:?}, move {}", mark, to_row_col(cell), self.pointer);

        Ok(if let Some(win) = find_win(&next) {
            log::debug!("{:?} wins on line {:?}", win.mark(), win.cells());
            Won
        } else if next.is_full() {
            log::debug!("board full with no line, tie");
            Tied
        } else {
            Placed
        })
    }

    /// Relocates the pointer to an existing move number.
    ///
    /// Navigation only: the history is left intact, and the side to
    /// move follows from the new pointer parity.
    pub fn jump_to(&mut self, move_number: usize) -> Result<JumpOutcome> {
        if move_number >= self.history.len() {
            return Err(GameError::InvalidMoveNumber);
        }

        if move_number == self.pointer {
            return Ok(JumpOutcome::NoChange);
        }

        self.pointer = move_number;
        log::debug!("jumped to move {}, {:?} to play", move_number, self.to_move());
        Ok(JumpOutcome::Jumped)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
