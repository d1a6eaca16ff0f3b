use crate::game::{Board, Cell, Player, CENTER_COL, COLS, ROWS};

/// Bonus per own piece in the center column.
const CENTER_WEIGHT: i32 = 3;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, me: Player, opponent: Player) -> i32;
}

/// Default heuristic: center control plus a scan of every 4-cell window.
///
/// Opponent threats are weighted slightly above our own, so the search
/// prefers blocking a three over building one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl PositionalHeuristic {
    fn score_window(window: [Cell; 4], own_cell: Cell, opp_cell: Cell) -> i32 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for cell in window {
            match cell {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }

        let mut score = match (own, empty) {
            (4, _) => 100_000,
            (3, 1) => 100,
            (2, 2) => 10,
            _ => 0,
        };
        score += match (opp, empty) {
            (3, 1) => -120,
            (2, 2) => -10,
            _ => 0,
        };
        score
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, me: Player, opponent: Player) -> i32 {
        let own_cell = me.to_cell();
        let opp_cell = opponent.to_cell();

        // Center column bonus
        let mut score = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i32
            * CENTER_WEIGHT;

        let mut add = |window: [Cell; 4]| score += Self::score_window(window, own_cell, opp_cell);

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                add(std::array::from_fn(|i| board.get(row, col + i)));
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                add(std::array::from_fn(|i| board.get(row + i, col)));
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                add(std::array::from_fn(|i| board.get(row + i, col + i)));
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                add(std::array::from_fn(|i| board.get(row - i, col + i)));
            }
        }

        score
    }
}

/// Static score of `board` for `me`, using [`PositionalHeuristic`].
pub fn score_position(board: &Board, me: Player, opponent: Player) -> i32 {
    PositionalHeuristic.evaluate(board, me, opponent)
}
