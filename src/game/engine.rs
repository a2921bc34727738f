//! Game state machine
//!
//! Owns the grid of past guesses, the in-progress guess, the cumulative
//! keyboard hints, and the win/loss status. All render-relevant data derives
//! from this state; hosts mutate it only through the operations here.

use super::hints::KeyboardHints;
use super::notice::{Notice, victory_message};
use crate::core::{Feedback, LetterStatus, Word, WordError};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;

/// Letters per guess
pub const WORD_LENGTH: usize = 5;

/// Guesses per game
pub const MAX_ATTEMPTS: usize = 6;

/// Solution used when the solution list is empty
///
/// A degraded mode for broken word-list data; selection never fails.
const FALLBACK_SOLUTION: &str = "HAPPY";

/// One cell of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl Tile {
    /// An unfilled tile
    pub const EMPTY: Self = Self {
        letter: None,
        status: LetterStatus::Unknown,
    };
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submission was refused
///
/// Both cases are ordinary gameplay, reported to the player and fully
/// recoverable; no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    TooShort,
    NotInWordList,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game was already over; nothing happened
    Ignored,
    /// Validation failed; state unchanged
    Rejected(GuessError),
    /// Row written, game continues on the next row
    Continue { feedback: Feedback },
    /// The guess matched the solution
    Won { feedback: Feedback, attempt: usize },
    /// Last row used without a win
    Lost { feedback: Feedback, solution: Word },
}

impl SubmitOutcome {
    /// The user-facing message for this outcome, if any
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Ignored | Self::Continue { .. } => None,
            Self::Rejected(GuessError::TooShort) => Some(Notice::transient("Not enough letters")),
            Self::Rejected(GuessError::NotInWordList) => {
                Some(Notice::transient("Not in word list"))
            }
            Self::Won { attempt, .. } => Some(Notice::transient(victory_message(*attempt))),
            Self::Lost { solution, .. } => Some(Notice::persistent(solution.text())),
        }
    }
}

/// A single Wordle game
///
/// The random source is generic so tests can seed solution selection;
/// hosts use the [`ThreadRng`] default via [`Game::new`].
#[derive(Debug)]
pub struct Game<R: Rng = ThreadRng> {
    lists: WordLists,
    solution: Word,
    grid: [[Tile; WORD_LENGTH]; MAX_ATTEMPTS],
    active_row: usize,
    current: Vec<char>,
    hints: KeyboardHints,
    status: GameStatus,
    rng: R,
}

impl Game<ThreadRng> {
    /// Start a game with a solution drawn from `lists`
    #[must_use]
    pub fn new(lists: WordLists) -> Self {
        Self::with_rng(lists, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Start a game using the given random source for solution selection
    pub fn with_rng(lists: WordLists, mut rng: R) -> Self {
        let solution = draw_solution(lists.solutions(), &mut rng);

        Self {
            lists,
            solution,
            grid: [[Tile::EMPTY; WORD_LENGTH]; MAX_ATTEMPTS],
            active_row: 0,
            current: Vec::with_capacity(WORD_LENGTH),
            hints: KeyboardHints::new(),
            status: GameStatus::InProgress,
            rng,
        }
    }

    /// Append a letter to the in-progress guess
    ///
    /// No-op once the game is over, once the guess is full, or for
    /// non-alphabetic input. Letters are normalized to uppercase.
    pub fn add_letter(&mut self, ch: char) {
        if self.is_over() || self.current.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return;
        }
        self.current.push(ch.to_ascii_uppercase());
    }

    /// Remove the last letter of the in-progress guess
    ///
    /// No-op once the game is over or when the guess is empty.
    pub fn remove_letter(&mut self) {
        if self.is_over() {
            return;
        }
        self.current.pop();
    }

    /// Empty the in-progress guess
    pub fn clear_guess(&mut self) {
        self.current.clear();
    }

    /// Submit the in-progress guess
    ///
    /// The guess buffer is cleared unless the submission was rejected.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        let word: String = self.current.iter().collect();
        let outcome = self.submit_word(&word);

        if !matches!(
            outcome,
            SubmitOutcome::Rejected(_) | SubmitOutcome::Ignored
        ) {
            self.current.clear();
        }

        outcome
    }

    /// Submit a supplied word, bypassing the letter buffer
    ///
    /// Validates length and dictionary membership, evaluates against the
    /// solution, folds the result into the grid and keyboard hints, then
    /// advances or terminates.
    pub fn submit_word(&mut self, word: &str) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::Ignored;
        }

        let guess = match Word::new(word) {
            Ok(guess) => guess,
            Err(WordError::InvalidLength(len)) if len < WORD_LENGTH => {
                return SubmitOutcome::Rejected(GuessError::TooShort);
            }
            Err(_) => return SubmitOutcome::Rejected(GuessError::NotInWordList),
        };

        if !self.lists.is_valid_guess(guess.text()) {
            return SubmitOutcome::Rejected(GuessError::NotInWordList);
        }

        let feedback = Feedback::evaluate(&guess, &self.solution);
        let row = self.active_row;

        for (i, tile) in self.grid[row].iter_mut().enumerate() {
            *tile = Tile {
                letter: Some(guess.char_at(i) as char),
                status: feedback.status_at(i),
            };
        }
        self.hints.apply(&guess, &feedback);
        self.active_row += 1;

        if feedback.is_win() {
            self.status = GameStatus::Won;
            SubmitOutcome::Won {
                feedback,
                attempt: row,
            }
        } else if row == MAX_ATTEMPTS - 1 {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost {
                feedback,
                solution: self.solution.clone(),
            }
        } else {
            SubmitOutcome::Continue { feedback }
        }
    }

    /// Start over with a freshly drawn solution
    ///
    /// Hosts should dismiss any visible notices when they call this.
    pub fn reset(&mut self) {
        self.solution = draw_solution(self.lists.solutions(), &mut self.rng);
        self.grid = [[Tile::EMPTY; WORD_LENGTH]; MAX_ATTEMPTS];
        self.active_row = 0;
        self.current.clear();
        self.hints.clear();
        self.status = GameStatus::InProgress;
    }

    /// The display grid: submitted rows, then the in-progress row, then blanks
    #[must_use]
    pub fn rows(&self) -> [[Tile; WORD_LENGTH]; MAX_ATTEMPTS] {
        let mut rows = self.grid;

        if self.status == GameStatus::InProgress
            && let Some(row) = rows.get_mut(self.active_row)
        {
            for (tile, &ch) in row.iter_mut().zip(&self.current) {
                *tile = Tile {
                    letter: Some(ch),
                    status: LetterStatus::Unknown,
                };
            }
        }

        rows
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Index of the row currently accepting input; equals the number of
    /// submitted rows, so it reads `MAX_ATTEMPTS` after a full board
    #[must_use]
    pub fn active_row(&self) -> usize {
        self.active_row
    }

    #[must_use]
    pub fn current_guess(&self) -> &[char] {
        &self.current
    }

    #[must_use]
    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// The hidden target word
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }
}

fn draw_solution<R: Rng>(solutions: &[Word], rng: &mut R) -> Word {
    solutions.choose(rng).cloned().unwrap_or_else(|| {
        Word::new(FALLBACK_SOLUTION).expect("fallback solution is a valid word")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lists(solutions: &[&str], guesses: &[&str]) -> WordLists {
        WordLists::new(
            solutions.iter().filter_map(|s| Word::new(*s).ok()).collect(),
            guesses.iter().filter_map(|s| Word::new(*s).ok()).collect(),
        )
    }

    fn game(solutions: &[&str], guesses: &[&str]) -> Game<StdRng> {
        Game::with_rng(lists(solutions, guesses), StdRng::seed_from_u64(42))
    }

    fn type_word(game: &mut Game<StdRng>, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    #[test]
    fn add_letter_caps_at_word_length() {
        let mut game = game(&["hello"], &[]);

        for ch in "ABCDEFGH".chars() {
            game.add_letter(ch);
        }

        assert_eq!(game.current_guess(), &['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn add_letter_normalizes_and_filters() {
        let mut game = game(&["hello"], &[]);

        game.add_letter('h');
        game.add_letter('3');
        game.add_letter(' ');
        game.add_letter('E');

        assert_eq!(game.current_guess(), &['H', 'E']);
    }

    #[test]
    fn remove_letter_pops_last() {
        let mut game = game(&["hello"], &[]);

        type_word(&mut game, "HEL");
        game.remove_letter();

        assert_eq!(game.current_guess(), &['H', 'E']);

        game.remove_letter();
        game.remove_letter();
        game.remove_letter(); // already empty, no-op

        assert!(game.current_guess().is_empty());
    }

    #[test]
    fn clear_guess_empties_buffer() {
        let mut game = game(&["hello"], &[]);

        type_word(&mut game, "HELLO");
        game.clear_guess();

        assert!(game.current_guess().is_empty());
    }

    #[test]
    fn submit_too_short_leaves_state_untouched() {
        let mut game = game(&["hello"], &["guess"]);

        type_word(&mut game, "ABCD");
        let outcome = game.submit_guess();

        assert_eq!(outcome, SubmitOutcome::Rejected(GuessError::TooShort));
        assert_eq!(
            outcome.notice().unwrap().text,
            "Not enough letters"
        );
        assert_eq!(game.rows()[0][4], Tile::EMPTY);
        assert_eq!(game.active_row(), 0);
        // Rejection keeps the typed letters
        assert_eq!(game.current_guess(), &['A', 'B', 'C', 'D']);
    }

    #[test]
    fn submit_unknown_word_rejected() {
        let mut game = game(&["hello"], &["guess"]);

        type_word(&mut game, "QQQQQ");
        let outcome = game.submit_guess();

        assert_eq!(outcome, SubmitOutcome::Rejected(GuessError::NotInWordList));
        assert_eq!(outcome.notice().unwrap().text, "Not in word list");
        assert_eq!(game.active_row(), 0);
    }

    #[test]
    fn submit_valid_guess_advances_row() {
        let mut game = game(&["hello"], &["guess"]);

        type_word(&mut game, "GUESS");
        let outcome = game.submit_guess();

        assert!(matches!(outcome, SubmitOutcome::Continue { .. }));
        assert!(outcome.notice().is_none());
        assert_eq!(game.active_row(), 1);
        assert!(game.current_guess().is_empty());

        let first_row: Vec<Option<char>> =
            game.rows()[0].iter().map(|tile| tile.letter).collect();
        assert_eq!(
            first_row,
            vec![Some('G'), Some('U'), Some('E'), Some('S'), Some('S')]
        );
    }

    #[test]
    fn submit_solution_wins_with_genius_on_first_try() {
        let mut game = game(&["hello"], &[]);

        type_word(&mut game, "HELLO");
        let outcome = game.submit_guess();

        assert!(matches!(outcome, SubmitOutcome::Won { attempt: 0, .. }));
        assert_eq!(outcome.notice().unwrap().text, "Genius");
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_over());
        assert!(game.current_guess().is_empty());

        let first_row = game.rows()[0];
        assert!(
            first_row
                .iter()
                .all(|tile| tile.status == LetterStatus::Correct)
        );
        let letters: String = first_row.iter().filter_map(|tile| tile.letter).collect();
        assert_eq!(letters, "HELLO");
    }

    #[test]
    fn later_wins_use_later_messages() {
        let mut game = game(&["hello"], &["guess"]);

        game.submit_word("GUESS");
        let outcome = game.submit_word("HELLO");

        assert!(matches!(outcome, SubmitOutcome::Won { attempt: 1, .. }));
        assert_eq!(outcome.notice().unwrap().text, "Magnificent");
    }

    #[test]
    fn six_misses_lose_and_reveal_solution() {
        let mut game = game(&["hello"], &["guess"]);

        for _ in 0..5 {
            assert!(matches!(
                game.submit_word("GUESS"),
                SubmitOutcome::Continue { .. }
            ));
        }
        let outcome = game.submit_word("GUESS");

        assert!(matches!(outcome, SubmitOutcome::Lost { .. }));
        assert_eq!(game.status(), GameStatus::Lost);

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.text, "HELLO");
        assert_eq!(notice.duration, crate::game::NoticeDuration::Persistent);
    }

    #[test]
    fn finished_game_ignores_input() {
        let mut game = game(&["hello"], &[]);

        game.submit_word("HELLO");
        assert!(game.is_over());

        game.add_letter('A');
        assert!(game.current_guess().is_empty());

        game.remove_letter(); // no-op, no panic
        assert_eq!(game.submit_word("HELLO"), SubmitOutcome::Ignored);
        assert_eq!(game.submit_guess(), SubmitOutcome::Ignored);
        assert_eq!(game.active_row(), 1);
    }

    #[test]
    fn submission_is_case_insensitive() {
        let mut game = game(&["hello"], &[]);

        let outcome = game.submit_word("hello");

        assert!(matches!(outcome, SubmitOutcome::Won { .. }));
    }

    #[test]
    fn hints_accumulate_across_guesses() {
        let mut game = game(&["hello"], &["guess", "hotel"]);

        game.submit_word("GUESS"); // E yellow, rest gray or absent
        game.submit_word("HOTEL"); // H green, O yellow, E yellow, L yellow

        let hints = game.hints();
        assert!(hints.correct_letters().contains(&'H'));
        assert!(hints.present_letters().contains(&'O'));
        assert!(hints.wrong_letters().contains(&'G'));
    }

    #[test]
    fn reset_restores_pristine_state() {
        let mut game = game(&["hello"], &["guess"]);

        game.submit_word("GUESS");
        game.submit_word("HELLO");
        assert!(game.is_over());

        game.reset();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.active_row(), 0);
        assert!(game.current_guess().is_empty());
        assert!(game.hints().correct_letters().is_empty());
        assert!(game.hints().present_letters().is_empty());
        assert!(game.hints().wrong_letters().is_empty());
        assert!(
            game.rows()
                .iter()
                .all(|row| row.iter().all(|tile| *tile == Tile::EMPTY))
        );
    }

    #[test]
    fn reset_draws_solution_from_configured_words() {
        let mut game = game(&["hello", "world", "crane"], &[]);

        for _ in 0..10 {
            game.reset();
            assert!(["HELLO", "WORLD", "CRANE"].contains(&game.solution().text()));
        }
    }

    #[test]
    fn solution_selection_is_deterministic_with_seeded_rng() {
        let make = || game(&["hello", "world", "crane", "slate"], &[]);

        let mut first = make();
        let mut second = make();

        for _ in 0..5 {
            first.reset();
            second.reset();
            assert_eq!(first.solution(), second.solution());
        }
    }

    #[test]
    fn empty_solution_list_falls_back() {
        let game = game(&[], &[]);

        assert_eq!(game.solution().text(), "HAPPY");
    }

    #[test]
    fn solution_is_always_a_valid_guess() {
        // The drawn solution must be submittable even if the allowed list
        // forgot it
        let mut game = game(&["hello"], &["guess"]);

        assert!(matches!(
            game.submit_word("HELLO"),
            SubmitOutcome::Won { .. }
        ));
    }

    #[test]
    fn active_row_mirrors_typed_letters() {
        let mut game = game(&["hello"], &["guess"]);

        game.submit_word("GUESS");
        type_word(&mut game, "HEL");

        let rows = game.rows();
        let active: Vec<Option<char>> = rows[1].iter().map(|tile| tile.letter).collect();
        assert_eq!(active, vec![Some('H'), Some('E'), Some('L'), None, None]);
        assert!(
            rows[1]
                .iter()
                .all(|tile| tile.status == LetterStatus::Unknown)
        );
    }
}
