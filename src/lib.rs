//! Wordle Game
//!
//! A terminal Wordle game: guess-evaluation engine, game state machine,
//! embedded word lists, and TUI/CLI frontends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Game, SubmitOutcome};
//! use wordle_game::wordlists::WordLists;
//!
//! let lists = WordLists::new(
//!     vec![Word::new("hello").unwrap()],
//!     vec![Word::new("crane").unwrap()],
//! );
//! let mut game = Game::new(lists);
//!
//! match game.submit_word("hello") {
//!     SubmitOutcome::Won { .. } => println!("Got it!"),
//!     outcome => println!("{:?}", outcome.notice()),
//! }
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
