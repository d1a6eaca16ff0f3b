use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::Difficulty;
use connect_four::config::{AppConfig, GameMode};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a friend or a bot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Who plays
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Bot strength
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Let the bot play Red and move first
    #[arg(long)]
    bot_first: bool,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Override the hard bot's search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(difficulty) = cli.difficulty {
        config.game.difficulty = difficulty;
    }
    if cli.bot_first {
        config.game.bot_first = true;
    }
    if cli.seed.is_some() {
        config.bot.seed = cli.seed;
    }
    if let Some(depth) = cli.depth {
        config.bot.search_plies = depth;
    }
    config.validate().context("invalid command line override")?;

    run_tui(&config).context("terminal UI failed")
}

/// Logs go to a file so they do not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
