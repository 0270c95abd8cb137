/// Single board position, row-major `0..=8`.
pub type CellIx = u8;

/// 1-indexed `(row, col)` pair used by move-list presentation.
pub type RowCol = (u8, u8);

/// Cells per side of the board.
pub const SIDE: CellIx = 3;

/// Total cell count.
pub const CELL_COUNT: usize = (SIDE * SIDE) as usize;

/// Converts a cell index to its 1-indexed `(row, col)`.
pub const fn to_row_col(cell: CellIx) -> RowCol {
    (cell / SIDE + 1, cell % SIDE + 1)
}
