use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{Board, GameState, Player};

use super::agent::Agent;
use super::medium::choose_medium;
use super::minimax::Minimax;
use super::random::bot_rng;

/// Search horizon of the hard bot, counting its own move.
pub const HARD_PLIES: u32 = 7;

/// Full minimax search [`HARD_PLIES`] deep. Returns a 1-based column, or
/// `None` when the board is full.
pub fn choose_hard<R: Rng + ?Sized>(
    board: &mut Board,
    me: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<usize> {
    choose_with_search(&mut Minimax::new(), board, HARD_PLIES, me, opponent, rng)
}

fn choose_with_search<R: Rng + ?Sized>(
    minimax: &mut Minimax,
    board: &mut Board,
    plies: u32,
    me: Player,
    opponent: Player,
    rng: &mut R,
) -> Option<usize> {
    let result = minimax.best_move(board, plies, me, opponent);
    match result.column {
        Some(col) => {
            debug!(
                column = col + 1,
                score = result.score,
                nodes = minimax.nodes(),
                plies,
                "hard bot searched"
            );
            Some(col + 1)
        }
        None => choose_medium(board, me, opponent, rng),
    }
}

/// Agent backed by the alpha-beta search.
pub struct HardBot {
    plies: u32,
    minimax: Minimax,
    rng: StdRng,
}

impl HardBot {
    pub fn new() -> Self {
        Self::with_plies(HARD_PLIES, None)
    }

    pub fn with_plies(plies: u32, seed: Option<u64>) -> Self {
        HardBot {
            plies,
            minimax: Minimax::new(),
            rng: bot_rng(seed),
        }
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }
}

impl Default for HardBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HardBot {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let me = state.current_player();
        let mut board = *state.board();
        choose_with_search(
            &mut self.minimax,
            &mut board,
            self.plies,
            me,
            me.other(),
            &mut self.rng,
        )
    }

    fn name(&self) -> &str {
        "Hard"
    }
}
