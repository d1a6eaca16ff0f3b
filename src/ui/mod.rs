//! Terminal UI: the board, column selector and status lines for playing
//! Connect Four against another human or a bot.

mod app;
mod game_view;

pub use app::App;
