//! # Connect Four
//!
//! Connect Four on the classic 6x7 board, for two humans or against a bot
//! with three difficulty tiers. The terminal UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ai`] — Bots: random, one-ply tactical, and alpha-beta minimax with a
//!   positional heuristic
//! - [`ui`] — Terminal UI: game view and input loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
