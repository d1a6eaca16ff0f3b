use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::{Board, GameState};

use super::agent::Agent;

/// Pick uniformly among the open columns. Returns a 1-based column, or
/// `None` when the board is full.
pub fn choose_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.open_columns();
    if open.is_empty() {
        return None;
    }
    let column = open[rng.random_range(0..open.len())] + 1;
    debug!(column, "random bot picked a column");
    Some(column)
}

/// Build the RNG used by the bots: seeded for reproducible games, otherwise
/// from the OS.
pub(crate) fn bot_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        RandomBot { rng: bot_rng(seed) }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomBot {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        choose_random(state.board(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_random_bot_selects_open_column() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        for col in [0, 2, 4, 6] {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }

        for _ in 0..100 {
            let column = choose_random(&board, &mut rng).unwrap();
            assert!([2, 4, 6].contains(&column), "column {column} is not open");
        }
    }

    #[test]
    fn test_random_bot_covers_every_column() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::new();
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[choose_random(&board, &mut rng).unwrap() - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_random_bot_is_reproducible() {
        let board = Board::new();
        let picks = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..20)
                .map(|_| choose_random(&board, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }

    #[test]
    fn test_random_bot_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Yellow).unwrap();
            }
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_random(&board, &mut rng), None);
    }

    #[test]
    fn test_random_bot_plays_full_game() {
        let mut agent1 = RandomBot::with_seed(Some(3));
        let mut agent2 = RandomBot::with_seed(Some(4));
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let column = if turn % 2 == 0 {
                agent1.select_action(&state)
            } else {
                agent2.select_action(&state)
            }
            .unwrap();
            state = state.apply_move(column - 1).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_bot_name() {
        let agent = RandomBot::new();
        assert_eq!(agent.name(), "Random");
    }
}
