//! User-facing game messages
//!
//! The engine reports short messages ("Not enough letters", the victory
//! exclamations, the revealed solution) as values; the host decides how to
//! show and expire them.

use std::time::Duration;

/// How long a notice should stay visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
    /// Dismiss after the given time
    Timed(Duration),
    /// Stays until explicitly dismissed (game reset)
    Persistent,
}

/// A short user-facing message emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub duration: NoticeDuration,
}

/// Display time for ordinary transient notices
pub const TRANSIENT: Duration = Duration::from_secs(2);

/// Victory exclamations, indexed by the winning attempt (0-based)
const VICTORY_MESSAGES: [&str; 6] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

impl Notice {
    /// A notice that disappears after [`TRANSIENT`]
    #[must_use]
    pub fn transient(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NoticeDuration::Timed(TRANSIENT),
        }
    }

    /// A notice that stays until dismissed
    #[must_use]
    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            duration: NoticeDuration::Persistent,
        }
    }
}

/// The exclamation shown for a win on the given 0-based attempt
#[must_use]
pub fn victory_message(attempt: usize) -> &'static str {
    VICTORY_MESSAGES.get(attempt).copied().unwrap_or("Great!")
}
