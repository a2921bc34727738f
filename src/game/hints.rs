//! Cumulative keyboard hint state
//!
//! Tracks, across all submitted guesses in one game, which letters have been
//! confirmed in position, seen out of position, or ruled out. The virtual
//! keyboard colors its keys from these sets.

use crate::core::{Feedback, LetterStatus, Word};
use rustc_hash::FxHashSet;

/// Per-letter classification accumulated across a game's guesses
///
/// The three sets are disjoint. Priority invariant: a letter in `correct`
/// stays there for the rest of the game; a letter leaves `present` only by
/// promotion to `correct`.
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    correct: FxHashSet<char>,
    present: FxHashSet<char>,
    wrong: FxHashSet<char>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the cumulative sets
    ///
    /// Letters already resolved as correct or wrong are skipped; their status
    /// cannot change. Within the guess, upgrades apply before downgrades
    /// (greens, then yellows, then grays) so a repeated letter cannot shadow
    /// its own exact match: EEEEE against ABBEY leaves E green, not gray.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let letters = guess.chars().map(|b| b as char);

        for (letter, status) in letters.into_iter().zip(feedback.statuses()) {
            if *status == LetterStatus::Correct && !self.wrong.contains(&letter) {
                self.present.remove(&letter);
                self.correct.insert(letter);
            }
        }

        for (letter, status) in letters.into_iter().zip(feedback.statuses()) {
            if *status == LetterStatus::Present
                && !self.correct.contains(&letter)
                && !self.wrong.contains(&letter)
            {
                self.present.insert(letter);
            }
        }

        for (letter, status) in letters.into_iter().zip(feedback.statuses()) {
            if *status == LetterStatus::Absent
                && !self.correct.contains(&letter)
                && !self.present.contains(&letter)
            {
                self.wrong.insert(letter);
            }
        }
    }

    /// Best known status for a letter, for keyboard coloring
    #[must_use]
    pub fn status_of(&self, letter: char) -> LetterStatus {
        let letter = letter.to_ascii_uppercase();

        if self.correct.contains(&letter) {
            LetterStatus::Correct
        } else if self.present.contains(&letter) {
            LetterStatus::Present
        } else if self.wrong.contains(&letter) {
            LetterStatus::Absent
        } else {
            LetterStatus::Unknown
        }
    }

    /// Letters confirmed in their exact position
    #[must_use]
    pub fn correct_letters(&self) -> &FxHashSet<char> {
        &self.correct
    }

    /// Letters seen in the word but not yet in position
    #[must_use]
    pub fn present_letters(&self) -> &FxHashSet<char> {
        &self.present
    }

    /// Letters ruled out
    #[must_use]
    pub fn wrong_letters(&self) -> &FxHashSet<char> {
        &self.wrong
    }

    /// Forget everything (new game)
    pub fn clear(&mut self) {
        self.correct.clear();
        self.present.clear();
        self.wrong.clear();
    }
}
