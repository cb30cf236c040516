use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use kanban_nav::board::Board;
use kanban_nav::config::Config;
use kanban_nav::logging::init_tracing;
use kanban_nav::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "kanban-nav", version, about = "Keyboard and mouse driven kanban board")]
struct Cli {
    /// Board file to open (TOML, or JSON with a .json extension).
    #[arg(long)]
    board: Option<PathBuf>,

    /// Config file (default: ~/.config/kanban-nav/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let board = match cli.board.as_ref().or(config.board.path.as_ref()) {
        Some(path) => Board::load(path)
            .with_context(|| format!("Failed to open board {}", path.display()))?,
        None => Board::sample(),
    };

    tracing::info!(columns = board.column_count(), "Starting board");
    runtime::run(board, &config)?;
    Ok(())
}
