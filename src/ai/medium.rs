use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::random::{bot_rng, choose_random};

/// Whether dropping `player`'s token into `col` would win on the spot. The
/// probe piece is always removed again.
fn wins_if_dropped(board: &mut Board, col: usize, player: Player) -> bool {
    board
        .place(col, player.to_cell())
        .is_some_and(|placed| placed.wins())
}

/// One-ply tactics: take a win, else block the opponent's win, else play a
/// random open column. Returns a 1-based column, or `None` when the board is
/// full.
pub fn choose_medium<R: Rng + ?Sized>(
    board: &mut Board,
    me: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<usize> {
    let open = board.open_columns();

    if let Some(col) = open.iter().copied().find(|&col| wins_if_dropped(board, col, me)) {
        debug!(column = col + 1, "medium bot takes the win");
        return Some(col + 1);
    }

    if let Some(col) = open
        .iter()
        .copied()
        .find(|&col| wins_if_dropped(board, col, opponent))
    {
        debug!(column = col + 1, "medium bot blocks");
        return Some(col + 1);
    }

    choose_random(board, rng)
}

/// Agent that wins or blocks when it can and otherwise plays randomly.
pub struct MediumBot {
    rng: StdRng,
}

impl MediumBot {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        MediumBot { rng: bot_rng(seed) }
    }
}

impl Default for MediumBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MediumBot {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let me = state.current_player();
        let mut board = *state.board();
        choose_medium(&mut board, me, me.other(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Medium"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};
    use rand::SeedableRng;

    fn board_from(moves: &[(usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(col, cell) in moves {
            board.drop_piece(col, cell).unwrap();
        }
        board
    }

    #[test]
    fn takes_winning_move() {
        // Red has three stacked in column 5
        let mut board = board_from(&[
            (5, Cell::Red),
            (0, Cell::Yellow),
            (5, Cell::Red),
            (1, Cell::Yellow),
            (5, Cell::Red),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng),
            Some(6)
        );
    }

    #[test]
    fn prefers_win_over_block() {
        // Yellow threatens the bottom row at column 3 (1-based 4); Red can
        // win vertically in column 6 (1-based 7).
        let mut board = board_from(&[
            (0, Cell::Yellow),
            (6, Cell::Red),
            (1, Cell::Yellow),
            (6, Cell::Red),
            (2, Cell::Yellow),
            (6, Cell::Red),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng),
            Some(7)
        );
    }

    #[test]
    fn blocks_opponent_win() {
        let mut board = board_from(&[
            (6, Cell::Red),
            (0, Cell::Yellow),
            (6, Cell::Red),
            (1, Cell::Yellow),
            (5, Cell::Red),
            (2, Cell::Yellow),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng),
            Some(4)
        );
    }

    #[test]
    fn first_winning_column_left_to_right() {
        // Red completes the bottom row by playing either column 0 or column 4
        let mut board = board_from(&[
            (1, Cell::Red),
            (2, Cell::Red),
            (3, Cell::Red),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng),
            Some(1)
        );
    }

    #[test]
    fn falls_back_to_random_open_column() {
        // Column 3 is full and nobody has a threat
        let mut board = Board::new();
        for i in 0..ROWS {
            let cell = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
            board.drop_piece(3, cell).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let column = choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng).unwrap();
            assert!((1..=COLS).contains(&column));
            assert_ne!(column, 4);
        }
    }

    #[test]
    fn full_board_has_no_move() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            choose_medium(&mut board, Player::Yellow, Player::Red, &mut rng),
            None
        );
    }

    #[test]
    fn leaves_board_untouched() {
        let mut board = board_from(&[
            (3, Cell::Red),
            (3, Cell::Yellow),
            (2, Cell::Red),
            (4, Cell::Yellow),
        ]);
        let before = board;
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            choose_medium(&mut board, Player::Red, Player::Yellow, &mut rng);
            assert_eq!(board, before);
        }
    }

    #[test]
    fn agent_plays_for_side_to_move() {
        // Yellow has three stacked in column 0
        let mut state = GameState::initial();
        for col in [6, 0, 5, 0, 6, 0] {
            state = state.apply_move(col).unwrap();
        }
        // Red is to move and has no win of its own, so it blocks
        let mut agent = MediumBot::with_seed(Some(1));
        assert_eq!(agent.select_action(&state), Some(1));
        assert_eq!(agent.name(), "Medium");
    }
}
