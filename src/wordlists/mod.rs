//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the [`WordLists`] pair the engine draws solutions from
//! and validates guesses against.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The two word sets a game needs
///
/// `solutions` are the candidates eligible to be drawn as the hidden word;
/// the valid-guess set is the superset accepted as submissions. Construction
/// unions the solutions into the valid set, so a drawn solution is always
/// submittable even when the allowed list omits it.
#[derive(Debug, Clone)]
pub struct WordLists {
    solutions: Vec<Word>,
    valid_guesses: FxHashSet<String>,
}

impl WordLists {
    /// Pair a solution list with an allowed-guess list
    #[must_use]
    pub fn new(solutions: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut valid_guesses: FxHashSet<String> = allowed
            .into_iter()
            .map(|word| word.text().to_owned())
            .collect();

        for word in &solutions {
            valid_guesses.insert(word.text().to_owned());
        }

        Self {
            solutions,
            valid_guesses,
        }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            loader::words_from_slice(ANSWERS),
            loader::words_from_slice(ALLOWED),
        )
    }

    /// Solution candidates
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Check whether a word is accepted as a submission
    ///
    /// Expects the uppercase form produced by [`Word::text`].
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.valid_guesses.contains(word)
    }

    /// Number of accepted guess words
    #[must_use]
    pub fn valid_guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}
