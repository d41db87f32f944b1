//! TUI application state and logic

use crate::commands::setup::{GameSetup, pick_target};
use crate::config::GameConfig;
use crate::game::{RoundEvent, RoundStatus, Statistics, TurnController};
use crate::words::{Validator, ValidatorError, WordTable, WordValidator};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::{Arc, mpsc};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Application state
pub struct App {
    pub controller: TurnController,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub source_name: &'static str,
    pub validator_name: &'static str,
    table: WordTable,
    config: GameConfig,
    validator: Arc<Validator>,
    events: mpsc::Receiver<RoundEvent>,
    pending: Option<JoinHandle<Result<bool, ValidatorError>>>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    /// Build the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the table has no word of the configured length.
    pub fn new(setup: GameSetup, config: GameConfig) -> Result<Self, String> {
        let target = pick_target(&setup.table, config.word_length, &mut rand::rng())?;
        let (tx, events) = mpsc::channel();
        let controller = TurnController::new(target, &config).with_observer(tx);
        let validator_name = setup.validator.name();

        let mut app = Self {
            controller,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            source_name: setup.source_name,
            validator_name,
            table: setup.table,
            config,
            validator: Arc::new(setup.validator),
            events,
            pending: None,
        };

        app.add_message("Welcome! Guess the hidden AI term.", MessageStyle::Info);
        for warning in &setup.warnings {
            app.add_message(&warning.to_string(), MessageStyle::Warning);
        }
        Ok(app)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Whether a validation task is running
    #[must_use]
    pub const fn is_validating(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.controller.status() {
            RoundStatus::Won | RoundStatus::Lost => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
            RoundStatus::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                    self.controller.add_letter(c);
                }
                KeyCode::Backspace => {
                    self.controller.remove_letter();
                }
                KeyCode::Enter => self.start_submit(),
                _ => {}
            },
            // Keys other than quit are ignored while validating
            RoundStatus::Submitting => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                }
            }
        }
        self.drain_events();
    }

    /// Hand the current guess to the validator on a background task
    fn start_submit(&mut self) {
        let Some(word) = self.controller.begin_submit() else {
            let length = self.controller.state().word_length();
            self.add_message(&format!("Guess must be {length} letters"), MessageStyle::Error);
            return;
        };

        let validator = Arc::clone(&self.validator);
        let limit = self.config.validate_timeout;
        self.pending = Some(tokio::spawn(async move {
            match tokio::time::timeout(limit, validator.validate(&word)).await {
                Ok(result) => result,
                Err(_) => Err(ValidatorError::Timeout(limit)),
            }
        }));
    }

    /// Collect a finished validation, if any, and score the guess
    pub async fn poll_pending(&mut self) {
        if !self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            return;
        }
        let Some(handle) = self.pending.take() else {
            return;
        };

        match handle.await {
            Ok(validation) => {
                if let Err(rejected) = self.controller.complete_submit(validation) {
                    debug!("{rejected}");
                }
            }
            Err(e) => {
                error!("validation task failed: {e}");
                self.controller.abort_submit();
                self.add_message("Could not check that word; try again", MessageStyle::Error);
            }
        }
        self.drain_events();
    }

    /// Start a fresh round with a new target
    pub fn new_round(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        match pick_target(&self.table, self.config.word_length, &mut rand::rng()) {
            Ok(target) => self.controller.reset_round(target),
            Err(e) => self.add_message(&e, MessageStyle::Error),
        }
        self.drain_events();
    }

    /// Turn controller events into messages and statistics
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                RoundEvent::GuessRejected(word) => self.add_message(
                    &format!("{word} is not an accepted word"),
                    MessageStyle::Error,
                ),
                RoundEvent::Warning(warning) => {
                    self.add_message(&warning.to_string(), MessageStyle::Warning);
                }
                RoundEvent::Won { attempts } => {
                    self.stats.record(self.controller.state());
                    let celebration = match attempts {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "🎊 SOLVED! 🎊",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }
                RoundEvent::Lost { target } => {
                    self.stats.record(self.controller.state());
                    self.add_message(&format!("Out of guesses! It was {target}"), MessageStyle::Error);
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }
                RoundEvent::Reset { word_length } => {
                    self.add_message(
                        &format!("New round: {word_length} letters"),
                        MessageStyle::Info,
                    );
                }
                RoundEvent::LetterAdded(_)
                | RoundEvent::LetterRemoved
                | RoundEvent::SubmitStarted(_)
                | RoundEvent::GuessScored { .. } => {}
            }
        }
    }
}

/// Run the TUI application
///
/// Returns the session statistics when the player quits.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        app.poll_pending().await;

        // Short poll so validation results show up without a key press
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::words::{AcceptAll, TableValidator};

    fn setup(words: &[&str], validator: Validator) -> GameSetup {
        GameSetup {
            table: WordTable::from_strs(words),
            validator,
            source_name: "test",
            warnings: Vec::new(),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    async fn settle(app: &mut App) {
        for _ in 0..100 {
            if !app.is_validating() {
                return;
            }
            tokio::task::yield_now().await;
            app.poll_pending().await;
        }
        panic!("validation never finished");
    }

    #[tokio::test]
    async fn typing_and_submitting_scores_a_guess() {
        let mut app = App::new(setup(&["MODEL"], Validator::AcceptAll(AcceptAll)), GameConfig::default())
            .unwrap();

        type_word(&mut app, "modes");
        assert_eq!(app.controller.state().current_guess(), "MODES");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.status(), RoundStatus::Submitting);

        settle(&mut app).await;
        assert_eq!(app.controller.state().guesses().len(), 1);
        assert_eq!(app.controller.hints().get('S'), Some(Verdict::Absent));
        assert_eq!(app.controller.status(), RoundStatus::Playing);
    }

    #[tokio::test]
    async fn winning_records_statistics() {
        let mut app = App::new(setup(&["CODE"], Validator::AcceptAll(AcceptAll)), GameConfig::default())
            .unwrap();

        type_word(&mut app, "code");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.controller.status(), RoundStatus::Won);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        // Letters are ignored once the round is over
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.controller.state().current_guess(), "");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.controller.status(), RoundStatus::Playing);
        assert!(app.controller.state().guesses().is_empty());
    }

    #[tokio::test]
    async fn rejected_guess_keeps_row() {
        let table = WordTable::from_strs(&["CODE"]);
        let validator = Validator::Table(TableValidator::new(table));
        let mut app = App::new(setup(&["CODE"], validator), GameConfig::default()).unwrap();

        type_word(&mut app, "cude");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert!(app.controller.state().guesses().is_empty());
        assert_eq!(app.controller.state().current_guess(), "CUDE");
        assert_eq!(app.controller.status(), RoundStatus::Playing);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Error && m.text.contains("CUDE"))
        );
    }

    #[tokio::test]
    async fn incomplete_guess_is_not_submitted() {
        let mut app = App::new(setup(&["MODEL"], Validator::AcceptAll(AcceptAll)), GameConfig::default())
            .unwrap();

        type_word(&mut app, "mod");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_validating());
        assert_eq!(app.controller.status(), RoundStatus::Playing);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.state().current_guess(), "MO");
    }

    #[tokio::test]
    async fn losing_round() {
        let config = GameConfig {
            max_attempts: 1,
            ..GameConfig::default()
        };
        let mut app = App::new(setup(&["RUST"], Validator::AcceptAll(AcceptAll)), config).unwrap();

        type_word(&mut app, "java");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert_eq!(app.controller.status(), RoundStatus::Lost);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[tokio::test]
    async fn quit_keys() {
        let mut app = App::new(setup(&["MODEL"], Validator::AcceptAll(AcceptAll)), GameConfig::default())
            .unwrap();
        // 'q' is a letter while playing
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn startup_warnings_become_messages() {
        let mut game = setup(&["MODEL"], Validator::AcceptAll(AcceptAll));
        game.warnings.push(crate::warning::Warning::WordSourceUnavailable {
            reason: "offline".to_string(),
        });
        let app = App::new(game, GameConfig::default()).unwrap();
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Warning && m.text.contains("offline"))
        );
    }

    #[test]
    fn missing_length_is_an_error() {
        let config = GameConfig {
            word_length: Some(7),
            ..GameConfig::default()
        };
        assert!(App::new(setup(&["MODEL"], Validator::AcceptAll(AcceptAll)), config).is_err());
    }

    #[tokio::test]
    async fn modified_letters_are_not_typed() {
        let mut app = App::new(setup(&["MODEL"], Validator::AcceptAll(AcceptAll)), GameConfig::default())
            .unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(app.controller.state().current_guess(), "");

        app.handle_key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.controller.state().current_guess(), "MO");
        assert!(!app.should_quit);
    }
}
