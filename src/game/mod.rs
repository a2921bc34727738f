//! Game state machine
//!
//! The engine that validates guesses, scores them against the solution,
//! tracks cumulative keyboard hints, and drives the win/loss lifecycle.

mod engine;
mod hints;
mod notice;

pub use engine::{Game, GameStatus, GuessError, MAX_ATTEMPTS, SubmitOutcome, Tile, WORD_LENGTH};
pub use hints::KeyboardHints;
pub use notice::{Notice, NoticeDuration, TRANSIENT, victory_message};
