//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    game::Game,
    interactive::{App, run_tui},
    wordlists::{
        ALLOWED, ANSWERS, WordLists,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a custom solutions file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Path to a custom allowed-guess file (default: builtin list)
    #[arg(short = 'g', long, global = true)]
    guesses: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load wordlists based on the -w/-g flags
///
/// Custom files use the same format as the builtin lists: two header lines,
/// then one 5-letter word per line.
fn load_wordlists(wordlist_mode: &str, guesses_path: Option<&str>) -> Result<WordLists> {
    let solutions = match wordlist_mode {
        "builtin" => words_from_slice(ANSWERS),
        path => load_from_file(path)?,
    };

    let allowed = match guesses_path {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ALLOWED),
    };

    Ok(WordLists::new(solutions, allowed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lists = load_wordlists(&cli.wordlist, cli.guesses.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lists),
        Commands::Simple => run_simple_command(lists),
    }
}

fn run_play_command(lists: WordLists) -> Result<()> {
    let app = App::new(Game::new(lists));
    run_tui(app)
}

fn run_simple_command(lists: WordLists) -> Result<()> {
    run_simple(Game::new(lists)).map_err(|e| anyhow::anyhow!(e))
}
