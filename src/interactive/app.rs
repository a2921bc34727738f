//! TUI application state and logic

use crate::game::{Game, Notice, NoticeDuration, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Redraw cadence; also bounds how late a timed message disappears
const TICK: Duration = Duration::from_millis(100);

/// Most messages kept in the panel
const MAX_VISIBLE_MESSAGES: usize = 5;

/// A notice queued in the message panel
#[derive(Debug, Clone)]
pub struct PanelMessage {
    pub text: String,
    pub style: MessageStyle,
    expires_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, kept across games within one run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App<R: Rng = ThreadRng> {
    pub game: Game<R>,
    pub messages: Vec<PanelMessage>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(game: Game<R>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message("Guess the hidden 5-letter word!", MessageStyle::Info);
        app.add_message("Type letters, Backspace to erase, Enter to submit.", MessageStyle::Info);
        app
    }

    /// Route one key press to the engine
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.game.is_over() => match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {
                    // Wait for a decision; the board stays up
                }
            },
            KeyCode::Char(c) => self.game.add_letter(c),
            KeyCode::Backspace => self.game.remove_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Submit the typed guess and reflect the outcome in the panel
    pub fn submit(&mut self) {
        let outcome = self.game.submit_guess();

        match &outcome {
            SubmitOutcome::Won { attempt, .. } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                let guess_count = attempt + 1;
                if guess_count < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[guess_count] += 1;
                }
            }
            SubmitOutcome::Lost { .. } => {
                self.stats.total_games += 1;
            }
            _ => {}
        }

        let style = match &outcome {
            SubmitOutcome::Rejected(_) => MessageStyle::Error,
            SubmitOutcome::Won { .. } => MessageStyle::Success,
            _ => MessageStyle::Info,
        };

        if let Some(notice) = outcome.notice() {
            self.push_notice(notice, style);
        }

        if self.game.is_over() {
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        // Reset dismisses everything, including persistent notices
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn push_notice(&mut self, notice: Notice, style: MessageStyle) {
        let expires_at = match notice.duration {
            NoticeDuration::Timed(duration) => Some(Instant::now() + duration),
            NoticeDuration::Persistent => None,
        };

        self.messages.push(PanelMessage {
            text: notice.text,
            style,
            expires_at,
        });
        self.trim_messages();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.push_notice(Notice::transient(text), style);
    }

    /// Drop timed messages whose display window has passed
    pub fn expire_messages(&mut self) {
        let now = Instant::now();
        self.messages
            .retain(|message| message.expires_at.is_none_or(|deadline| deadline > now));
    }

    fn trim_messages(&mut self) {
        if self.messages.len() > MAX_VISIBLE_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.expire_messages();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll instead of blocking so timed messages expire on their own
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordLists;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(solutions: &[&str], guesses: &[&str]) -> App<StdRng> {
        let lists = WordLists::new(
            solutions.iter().filter_map(|s| Word::new(*s).ok()).collect(),
            guesses.iter().filter_map(|s| Word::new(*s).ok()).collect(),
        );
        App::new(Game::with_rng(lists, StdRng::seed_from_u64(7)))
    }

    fn press(app: &mut App<StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_fills_the_active_row() {
        let mut app = app(&["hello"], &[]);

        type_word(&mut app, "he");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.game.current_guess(), &['H']);
    }

    #[test]
    fn rejection_shows_error_message() {
        let mut app = app(&["hello"], &[]);

        type_word(&mut app, "hel");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.game.active_row(), 0);
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = app(&["hello"], &[]);

        type_word(&mut app, "hello");
        press(&mut app, KeyCode::Enter);

        assert!(app.game.is_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.messages.iter().any(|m| m.text == "Genius"));
    }

    #[test]
    fn losing_counts_the_game_without_a_win() {
        let mut app = app(&["hello"], &["guess"]);

        for _ in 0..6 {
            type_word(&mut app, "guess");
            press(&mut app, KeyCode::Enter);
        }

        assert!(app.game.is_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        // The solution stays visible until dismissed
        assert!(app.messages.iter().any(|m| m.text == "HELLO"));
    }

    #[test]
    fn letters_after_game_over_do_not_type() {
        let mut app = app(&["hello"], &[]);

        type_word(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "abc");

        assert!(app.game.current_guess().is_empty());
    }

    #[test]
    fn n_starts_a_new_game_after_game_over() {
        let mut app = app(&["hello"], &[]);

        type_word(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert!(!app.game.is_over());
        assert_eq!(app.game.active_row(), 0);
        assert_eq!(app.stats.total_games, 1);
        // Reset dismissed the win notices
        assert!(app.messages.iter().all(|m| m.text != "Genius"));
    }

    #[test]
    fn q_quits_only_after_game_over() {
        let mut app = app(&["hello"], &[]);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.game.current_guess(), &['Q']);

        app.game.clear_guess();
        type_word(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('q'));

        assert!(app.should_quit);
    }

    #[test]
    fn escape_always_quits() {
        let mut app = app(&["hello"], &[]);

        press(&mut app, KeyCode::Esc);

        assert!(app.should_quit);
    }

    #[test]
    fn message_panel_is_bounded() {
        let mut app = app(&["hello"], &[]);

        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert!(app.messages.len() <= MAX_VISIBLE_MESSAGES);
    }

    #[test]
    fn expired_messages_are_dropped() {
        let mut app = app(&["hello"], &[]);
        app.messages.clear();

        app.push_notice(
            Notice {
                text: "gone".to_string(),
                duration: NoticeDuration::Timed(Duration::ZERO),
            },
            MessageStyle::Info,
        );
        app.push_notice(Notice::persistent("stays"), MessageStyle::Info);

        app.expire_messages();

        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["stays"]);
    }
}
