//! Guess feedback calculation and representation
//!
//! Feedback records, for one evaluated guess, the status of every letter:
//! - `Correct` (green): letter in the exact position
//! - `Present` (yellow): letter elsewhere in the word, multiplicity-limited
//! - `Absent` (gray): letter not in the word, or all its copies spoken for
//! - `Unknown`: not yet evaluated (tiles in the active row)

use super::Word;

/// Match status of a single letter in a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
    #[default]
    Unknown,
}

/// Display color for a tile or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Green,
    Yellow,
    Gray,
}

impl LetterStatus {
    /// Map a status to its display color
    ///
    /// Total and side-effect free; `Unknown` has no color.
    #[inline]
    #[must_use]
    pub const fn tile_color(self) -> Option<TileColor> {
        match self {
            Self::Correct => Some(TileColor::Green),
            Self::Present => Some(TileColor::Yellow),
            Self::Absent => Some(TileColor::Gray),
            Self::Unknown => None,
        }
    }
}

/// Feedback for a submitted Wordle guess
///
/// One status per position. Produced only by [`Feedback::evaluate`], so no
/// position is ever `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterStatus; 5]);

impl Feedback {
    /// All greens (the guess equals the solution)
    pub const WIN: Self = Self([LetterStatus::Correct; 5]);

    /// Calculate the feedback when `guess` is guessed and `solution` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (greens) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position (yellows) from remaining pool
    ///
    /// Position-exact matches always win over elsewhere-matches: the first pass
    /// runs over the whole word before the second begins, so a single
    /// left-to-right sweep cannot hand a green letter's copy to an earlier
    /// yellow.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.status_at(2), LetterStatus::Correct);
    /// assert_eq!(feedback.status_at(4), LetterStatus::Correct);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let mut result = [LetterStatus::Absent; 5];
        let mut available = solution.char_counts();

        // First pass: Mark greens (exact position matches)
        // Allow: Index needed to access guess[i], solution[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == solution.chars()[i] {
                result[i] = LetterStatus::Correct;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark yellows (wrong position, but letter remains)
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == LetterStatus::Absent {
                // Not already green
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; 5] {
        &self.0
    }

    /// Get the status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a winning guess (all greens)
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0 == [LetterStatus::Correct; 5]
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Correct)
            .count()
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterStatus::Present)
            .count()
    }

    /// Convert feedback to an emoji string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|status| match status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}
