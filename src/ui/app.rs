use crate::ai::Agent;
use crate::config::{AppConfig, GameMode};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    mode_label: String,
    bot: Option<Box<dyn Agent>>,
    bot_player: Player,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let (bot, mode_label) = match config.game.mode {
            GameMode::HumanVsHuman => (None, config.game.mode.name().to_string()),
            GameMode::HumanVsBot => {
                let difficulty = config.game.difficulty;
                (
                    Some(difficulty.agent(config.bot.seed, config.bot.search_plies)),
                    format!("{} ({})", config.game.mode.name(), difficulty.name()),
                )
            }
        };
        let bot_player = if config.game.bot_first {
            Player::Red
        } else {
            Player::Yellow
        };
        info!(mode = %mode_label, bot_player = bot_player.name(), "starting game");

        App {
            game_state: GameState::initial(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            mode_label,
            bot,
            bot_player,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            if self.is_bot_turn() {
                self.play_bot_move();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn is_bot_turn(&self) -> bool {
        self.bot.is_some()
            && !self.game_state.is_terminal()
            && self.game_state.current_player() == self.bot_player
    }

    /// Let the bot pick and play a column
    fn play_bot_move(&mut self) {
        let Some(bot) = self.bot.as_mut() else {
            return;
        };
        match bot.select_action(&self.game_state) {
            Some(column) => {
                debug!(bot = bot.name(), column, "bot move");
                self.selected_column = column - 1;
                self.drop_piece();
            }
            // The loop only asks on a live game, which always has an open column
            None => self.message = Some("Bot has no move!".to_string()),
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.message = Some("Please choose a column from 1 to 7.".to_string());
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
                info!("game restarted");
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    info!(?outcome, "game over");
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", player.name())
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
