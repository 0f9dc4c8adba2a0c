//! Full-screen game state: the session, clue draft and key handling

use crate::core::{Clue, Status, WORD_LENGTH, Word};
use crate::solver::{GuessMetrics, Partition, Session, SessionStatus, Strategy};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    initial: Session,
    pub session: Session,
    /// Earlier sessions, most recent last
    pub undo_stack: Vec<Session>,
    pub current_guess: Option<GuessInfo>,
    /// Clue being entered for the current guess
    pub draft: Clue,
    /// Tile the next status key applies to
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Clue,
    ManualWord,
    /// Solved or contradicted; only new game, undo and quit apply
    Finished,
}

#[derive(Debug, Clone, Copy)]
pub struct GuessInfo {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// The mode's own ranking value for this guess
    pub score: f64,
    pub suggested: bool,
}

impl GuessInfo {
    fn new(session: &Session, word: Word, suggested: bool) -> Self {
        let partition = Partition::of(&word, session.answers());
        Self {
            word,
            metrics: GuessMetrics::from(&partition),
            score: session.config().mode.score(&partition),
            suggested,
        }
    }
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
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mode = session.config().mode;
        let mut app = Self {
            initial: session.clone(),
            session,
            undo_stack: Vec::new(),
            current_guess: None,
            draft: Clue::default(),
            cursor: 0,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Clue,
            manual_word: String::new(),
        };
        app.add_message(
            &format!("Welcome! Solving {mode}. Enter the clue tile by tile."),
            MessageStyle::Info,
        );
        app.add_message(
            "g/y/- set a tile, ←/→ move, ↑/↓ cycle, Enter submits",
            MessageStyle::Info,
        );
        app.compute_suggestion();
        app
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.suggest() {
            Some(word) => self.current_guess = Some(GuessInfo::new(&self.session, word, true)),
            None => {
                self.current_guess = None;
                self.add_message("No playable guess is left", MessageStyle::Error);
            }
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Clue => self.handle_clue_key(key.code),
            InputMode::ManualWord => self.handle_manual_key(key.code),
        }
    }

    fn handle_clue_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('u') => self.undo_last(),
            KeyCode::Char('g' | 'G') => self.set_tile(Status::Correct),
            KeyCode::Char('y' | 'Y') => self.set_tile(Status::Present),
            KeyCode::Char('-' | 'x' | 'X' | '_') => self.set_tile(Status::Absent),
            KeyCode::Left | KeyCode::Backspace => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1),
            KeyCode::Up => {
                let status = self.draft.status_at(self.cursor).next();
                self.draft.set(self.cursor, status);
            }
            KeyCode::Down => {
                let status = self.draft.status_at(self.cursor).previous();
                self.draft.set(self.cursor, status);
            }
            KeyCode::Enter => self.submit_clue(),
            KeyCode::Tab => {
                self.input_mode = InputMode::ManualWord;
                self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
            }
            _ => {}
        }
    }

    fn handle_manual_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Clue;
                self.manual_word.clear();
                self.add_message("Cancelled manual word entry", MessageStyle::Info);
            }
            KeyCode::Tab => {
                self.input_mode = InputMode::Clue;
                self.manual_word.clear();
            }
            KeyCode::Char(c) => {
                if self.manual_word.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.manual_word.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.manual_word.pop();
            }
            KeyCode::Enter => {
                if self.manual_word.len() == WORD_LENGTH {
                    self.use_manual_word();
                } else {
                    self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                }
            }
            _ => {}
        }
    }

    fn set_tile(&mut self, status: Status) {
        self.draft.set(self.cursor, status);
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    fn reset_draft(&mut self) {
        self.draft = Clue::default();
        self.cursor = 0;
    }

    /// Apply the drafted clue to the current guess
    pub fn submit_clue(&mut self) {
        let Some(guess) = self.current_guess.map(|info| info.word) else {
            self.add_message("No guess to give a clue for", MessageStyle::Error);
            return;
        };
        let clue = self.draft;

        self.undo_stack.push(self.session.clone());
        self.session = self.session.clone().apply(guess, clue);
        self.reset_draft();

        match self.session.status() {
            SessionStatus::InProgress => {
                self.compute_suggestion();
                self.add_message(
                    &format!(
                        "{} {}: {} answers remaining",
                        guess.text().to_uppercase(),
                        clue.to_emoji(),
                        self.session.answers().len()
                    ),
                    MessageStyle::Info,
                );
            }
            SessionStatus::Solved(answer) => {
                let turns = self.session.turns_played();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(turns) {
                    *slot += 1;
                }
                self.current_guess = None;
                self.input_mode = InputMode::Finished;

                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE!",
                    2..=3 => "✨ SPLENDID!",
                    4..=6 => "👏 SOLVED!",
                    _ => "🎊 SURVIVED!",
                };
                self.add_message(
                    &format!(
                        "{celebration} The answer is {} ({turns} guesses)",
                        answer.text().to_uppercase()
                    ),
                    MessageStyle::Success,
                );
                self.add_message("n starts a new game, q quits", MessageStyle::Info);
            }
            SessionStatus::Contradiction => {
                self.current_guess = None;
                self.input_mode = InputMode::Finished;
                self.add_message(
                    "No answers remain - a clue may be wrong. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = self.initial.clone();
        self.undo_stack.clear();
        self.reset_draft();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Clue;
        self.add_message(
            "New game started! Here is the best first guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.undo_stack.pop() {
            self.session = previous;
            self.reset_draft();
            self.input_mode = InputMode::Clue;
            self.compute_suggestion();
            self.add_message("Took back the last clue", MessageStyle::Info);
        } else {
            self.add_message("No clue to take back", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // last 5 only
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn answers_count(&self) -> usize {
        self.session.answers().len()
    }

    /// Answers at the start of a game
    #[must_use]
    pub fn initial_answers_count(&self) -> usize {
        self.initial.answers().len()
    }

    pub fn use_manual_word(&mut self) {
        let word = match Word::new(&self.manual_word) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error);
                return;
            }
        };

        if !self.session.accepts(&word) {
            self.add_message(
                &format!("Word '{}' not in guess list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let info = GuessInfo::new(&self.session, word, false);
        if let Some(suggested) = self.current_guess
            && suggested.metrics.expected_remaining < info.metrics.expected_remaining
        {
            self.add_message(
                &format!(
                    "Note: {} leaves {:.1} fewer answers on average",
                    suggested.word.text().to_uppercase(),
                    info.metrics.expected_remaining - suggested.metrics.expected_remaining
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (expected {:.1}, worst {})",
                word.text().to_uppercase(),
                info.metrics.expected_remaining,
                info.metrics.max_partition
            ),
            MessageStyle::Success,
        );
        self.current_guess = Some(info);
        self.input_mode = InputMode::Clue;
        self.manual_word.clear();
        self.reset_draft();
    }
}

/// Take over the terminal and play until the user quits
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
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
