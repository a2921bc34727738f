//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Files are line-oriented: the first two lines are header comment and
//! skipped, each remaining line holds one word. Entries are trimmed and
//! case-normalized; anything that is not exactly 5 letters is skipped rather
//! than treated as an error.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Number of leading header lines in a word list file
const HEADER_LINES: usize = 2;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping the header lines and
/// any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .skip(HEADER_LINES)
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
