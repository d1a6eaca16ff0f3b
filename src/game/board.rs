use std::ops::{Deref, DerefMut};

use crate::error::MoveError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the center column.
pub const CENTER_COL: usize = COLS / 2;

/// Line directions as (row step, column step): right, down, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    pub fn first_free_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Columns that can still take a piece, left to right (0-based).
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.first_free_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Drop a player's token using the 1-based column numbering shown to
    /// players. Returns `false`, leaving the board untouched, if the column is
    /// out of range or full.
    pub fn drop_at(&mut self, column: usize, player: Player) -> bool {
        column
            .checked_sub(1)
            .is_some_and(|col| self.drop_piece(col, player.to_cell()).is_ok())
    }

    /// Speculatively place a piece. The piece is removed again when the
    /// returned guard goes out of scope.
    pub fn place(&mut self, col: usize, cell: Cell) -> Option<Placement<'_>> {
        let row = self.first_free_row(col)?;
        self.cells[row][col] = cell;
        Some(Placement {
            board: self,
            row,
            col,
        })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// A draw is a full top row; with gravity that means a full board.
    pub fn is_draw(&self) -> bool {
        self.cells[0].iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check whether `player` has four in a row anywhere on the board.
    pub fn is_winner(&self, player: Player) -> bool {
        let cell = player.to_cell();
        (0..ROWS).any(|row| {
            (0..COLS).any(|col| {
                self.cells[row][col] == cell
                    && DIRECTIONS
                        .iter()
                        .any(|&(dr, dc)| self.run_of_four(row, col, dr, dc, cell))
            })
        })
    }

    fn run_of_four(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..4).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == cell
        })
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.line_length(row, col, dr, dc, cell) >= 4)
    }

    /// Length of the run of `cell` through (row, col) along one axis.
    fn line_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 1;
        for sign in [-1, 1] {
            let mut r = row as isize + dr * sign;
            let mut c = col as isize + dc * sign;
            while (0..ROWS as isize).contains(&r)
                && (0..COLS as isize).contains(&c)
                && self.cells[r as usize][c as usize] == cell
            {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A piece placed by [`Board::place`]. Derefs to the board so searches can
/// keep working on it; dropping the guard empties the cell again.
pub struct Placement<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl Placement<'_> {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether the placed piece completes a line of four.
    pub fn wins(&self) -> bool {
        self.board.check_win(self.row, self.col)
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.row][self.col] = Cell::Empty;
    }
}
