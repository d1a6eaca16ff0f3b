//! Core Connect Four game logic: board representation with gravity and
//! win/draw detection, player tokens, and the turn-taking game state.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Placement, CENTER_COL, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, LegalActions};
