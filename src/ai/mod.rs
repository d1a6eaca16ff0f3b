//! Computer players: the positional heuristic, the alpha-beta search, and the
//! three difficulty tiers built on them.

mod agent;
mod hard;
pub mod heuristic;
mod medium;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use hard::{choose_hard, HardBot, HARD_PLIES};
pub use heuristic::{score_position, Heuristic, PositionalHeuristic};
pub use medium::{choose_medium, MediumBot};
pub use minimax::{search, Minimax, SearchResult, MOVE_ORDER};
pub use random::{choose_random, RandomBot};

/// Bot strength offered in human-vs-bot games.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random open column.
    Easy,
    /// Wins or blocks one move ahead, random otherwise.
    Medium,
    /// Alpha-beta search.
    Hard,
}

impl Difficulty {
    /// Build the bot for this tier. `plies` only affects [`Difficulty::Hard`].
    pub fn agent(self, seed: Option<u64>, plies: u32) -> Box<dyn Agent> {
        match self {
            Difficulty::Easy => Box::new(RandomBot::with_seed(seed)),
            Difficulty::Medium => Box::new(MediumBot::with_seed(seed)),
            Difficulty::Hard => Box::new(HardBot::with_plies(plies, seed)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
