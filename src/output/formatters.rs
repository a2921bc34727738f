//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, TileColor};
use crate::game::KeyboardHints;
use colored::Colorize;

/// QWERTY rows of the virtual keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format a guess with each letter colored by its feedback
#[must_use]
pub fn colorize_guess(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.statuses())
        .map(|(letter, status)| colorize_letter(letter, *status))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a guess row as "L E T T E R 🟩🟨⬜⬜⬜"
#[must_use]
pub fn guess_line(word: &str, feedback: &Feedback) -> String {
    format!("{}  {}", colorize_guess(word, feedback), feedback.to_emoji())
}

/// Format the keyboard with each key colored by its cumulative hint
///
/// Rows are indented to suggest the stagger of a physical keyboard.
#[must_use]
pub fn colorize_keyboard(hints: &KeyboardHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .chars()
                .map(|letter| colorize_letter(letter, hints.status_of(letter)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{}", " ".repeat(i), keys)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_letter(letter: char, status: LetterStatus) -> String {
    let text = letter.to_string();

    match status.tile_color() {
        Some(TileColor::Green) => text.bright_green().bold().to_string(),
        Some(TileColor::Yellow) => text.bright_yellow().bold().to_string(),
        Some(TileColor::Gray) => text.bright_black().to_string(),
        None => text.white().to_string(),
    }
}
