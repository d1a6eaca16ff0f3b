use crate::game::{Board, Player};

use super::heuristic::{Heuristic, PositionalHeuristic};

/// Base score of a decided game; remaining depth is added so faster wins
/// (and slower losses) rank higher.
pub const WIN_SCORE: i32 = 1_000_000;

/// Alpha-beta window bound. Also returned unchanged by a node with no
/// playable column.
pub const SCORE_INF: i32 = 1_000_000_000;

/// Column ordering: center-first for better alpha-beta pruning.
pub const MOVE_ORDER: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// Outcome of a root search. `column` is 0-based and `None` when no column
/// could be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The board is searched in place: every speculative move goes through
/// [`Board::place`], so the board is back to its original contents when a
/// call returns, including after a cutoff.
pub struct Minimax {
    heuristic: Box<dyn Heuristic>,
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(PositionalHeuristic))
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            heuristic,
            nodes: 0,
        }
    }

    /// Nodes visited by the searches since the last [`Minimax::best_move`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best column for `me` looking `plies` half-moves ahead. The
    /// root move is the first ply. Ties go to the column tried first.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        plies: u32,
        me: Player,
        opponent: Player,
    ) -> SearchResult {
        self.nodes = 0;
        let mut best = SearchResult {
            score: -SCORE_INF,
            column: None,
        };

        for &col in &MOVE_ORDER {
            let Some(mut placed) = board.place(col, me.to_cell()) else {
                continue;
            };
            let score = self.search(
                &mut placed,
                plies.saturating_sub(1),
                false,
                me,
                opponent,
                -SCORE_INF,
                SCORE_INF,
            );
            if score > best.score {
                best = SearchResult {
                    score,
                    column: Some(col),
                };
            }
        }

        best
    }

    /// Score `board` from `me`'s point of view, `depth` plies deep.
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        me: Player,
        opponent: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        // Terminal check
        if board.is_winner(me) {
            return WIN_SCORE + depth as i32;
        }
        if board.is_winner(opponent) {
            return -WIN_SCORE - depth as i32;
        }
        if board.is_draw() || depth == 0 {
            return self.heuristic.evaluate(board, me, opponent);
        }

        if maximizing {
            let mut best = -SCORE_INF;
            for &col in &MOVE_ORDER {
                let Some(mut placed) = board.place(col, me.to_cell()) else {
                    continue;
                };
                let score = self.search(&mut placed, depth - 1, false, me, opponent, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INF;
            for &col in &MOVE_ORDER {
                let Some(mut placed) = board.place(col, opponent.to_cell()) else {
                    continue;
                };
                let score = self.search(&mut placed, depth - 1, true, me, opponent, alpha, beta);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimax search with the default [`PositionalHeuristic`].
pub fn search(
    board: &mut Board,
    depth: u32,
    maximizing: bool,
    me: Player,
    opponent: Player,
    alpha: i32,
    beta: i32,
) -> i32 {
    Minimax::new().search(board, depth, maximizing, me, opponent, alpha, beta)
}
