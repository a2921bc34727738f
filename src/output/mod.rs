//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode.

pub mod formatters;

pub use formatters::{KEYBOARD_ROWS, colorize_guess, colorize_keyboard, guess_line};
