//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Game, MAX_ATTEMPTS, SubmitOutcome};
use crate::output::formatters::{colorize_keyboard, guess_line};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut game: Game) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle - Simple CLI Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {MAX_ATTEMPTS} tries.");
    println!("After each guess the letters are colored:\n");
    println!("  - 🟩 green:  right letter, right spot");
    println!("  - 🟨 yellow: right letter, wrong spot");
    println!("  - ⬜ gray:   letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        let turn = game.active_row() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let outcome = game.submit_word(&input);
        let word = input.to_uppercase();

        match &outcome {
            SubmitOutcome::Rejected(_) => {
                if let Some(notice) = outcome.notice() {
                    println!("❌ {}\n", notice.text);
                }
            }
            SubmitOutcome::Continue { feedback } => {
                println!("\n  {}\n", guess_line(&word, feedback));
                println!("{}\n", colorize_keyboard(game.hints()));
            }
            SubmitOutcome::Won { feedback, attempt } => {
                println!("\n  {}\n", guess_line(&word, feedback));

                println!("{}", "═".repeat(64).bright_cyan());
                if let Some(notice) = outcome.notice() {
                    println!("  {}", notice.text.bright_green().bold());
                }
                let guesses = attempt + 1;
                println!(
                    "  Solved in {} {}",
                    guesses.to_string().bright_cyan().bold(),
                    if guesses == 1 { "guess" } else { "guesses" }
                );
                println!("{}\n", "═".repeat(64).bright_cyan());
            }
            SubmitOutcome::Lost { feedback, solution } => {
                println!("\n  {}\n", guess_line(&word, feedback));
                println!(
                    "😔 Out of guesses. The word was {}\n",
                    solution.text().bright_yellow().bold()
                );
            }
            SubmitOutcome::Ignored => {}
        }

        if game.is_over() {
            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    game.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
