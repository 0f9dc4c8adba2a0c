//! Simple interactive CLI mode
//!
//! Line-based play without the full-screen interface. Reads from any
//! `BufRead` and writes to any `Write`, so the whole loop runs in tests.

use crate::core::{Clue, Word};
use crate::output::formatters::clue_to_emoji;
use crate::solver::{GuessMetrics, Session, SessionStatus};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Words the line-mode loop understands at any prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    Undo,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "undo" | "u" => Some(Self::Undo),
            _ => None,
        }
    }
}

/// What the player entered at the guess prompt
enum GuessInput {
    Guess(Word),
    Command(Command),
}

/// What the player entered at the clue prompt
enum ClueInput {
    Clue(Clue),
    Command(Command),
}

struct SimpleGame<'a, R, W> {
    initial: Session,
    session: Session,
    undo_stack: Vec<Session>,
    input: &'a mut R,
    output: &'a mut W,
}

/// Run the line-mode loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(session: Session, input: &mut R, output: &mut W) -> Result<()> {
    let mut game = SimpleGame {
        initial: session.clone(),
        session,
        undo_stack: Vec::new(),
        input,
        output,
    };
    game.print_banner()?;
    game.run()?;
    writeln!(game.output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

impl<R: BufRead, W: Write> SimpleGame<'_, R, W> {
    fn print_banner(&mut self) -> Result<()> {
        let mode = self.session.config().mode;
        writeln!(self.output, "\n{}", "═".repeat(62).cyan())?;
        writeln!(
            self.output,
            "  {} {}{}",
            "Solver for".bright_cyan().bold(),
            mode.name().to_uppercase().bright_yellow().bold(),
            if self.session.config().hard_mode {
                " (hard mode)"
            } else {
                ""
            }
        )?;
        writeln!(self.output, "{}\n", "═".repeat(62).cyan())?;
        writeln!(self.output, "Press Enter to play the suggestion or type your own guess.")?;
        writeln!(self.output, "Then enter the clue:")?;
        writeln!(self.output, "  - G/g/🟩 for green (correct position)")?;
        writeln!(self.output, "  - Y/y/🟨 for yellow (wrong position)")?;
        writeln!(self.output, "  - -/_/x/⬜ for gray (not in word)")?;
        writeln!(self.output, "  - or 'win' if the guess was right\n")?;
        writeln!(
            self.output,
            "Commands: 'quit' to exit, 'new' for a new game, 'undo' to take back a guess\n"
        )?;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        loop {
            let command = match self.session.status() {
                SessionStatus::InProgress => match self.play_turn()? {
                    Some(command) => command,
                    None => continue,
                },
                SessionStatus::Solved(answer) => {
                    self.print_solved(answer)?;
                    match self.read_command()? {
                        Some(command) => command,
                        None => return Ok(()),
                    }
                }
                SessionStatus::Contradiction => {
                    writeln!(
                        self.output,
                        "\n❌ No answers remain! A clue may have been entered wrong."
                    )?;
                    match self.read_command()? {
                        Some(command) => command,
                        None => return Ok(()),
                    }
                }
            };

            match command {
                Command::Quit => return Ok(()),
                Command::New => {
                    self.session = self.initial.clone();
                    self.undo_stack.clear();
                    writeln!(self.output, "\n🔄 New game started!\n")?;
                }
                Command::Undo => match self.undo_stack.pop() {
                    Some(previous) => {
                        self.session = previous;
                        writeln!(
                            self.output,
                            "✓ Undone! Back to turn {}\n",
                            self.session.turns_played() + 1
                        )?;
                    }
                    None => writeln!(self.output, "Nothing to undo!\n")?,
                },
            }
        }
    }

    /// One guess and its clue; returns a command if the player gave one
    ///
    /// End of input is reported as `Quit`.
    fn play_turn(&mut self) -> Result<Option<Command>> {
        let suggestion = self.session.suggest();
        self.print_turn_header(suggestion)?;

        let guess = match self.read_guess(suggestion)? {
            GuessInput::Guess(guess) => guess,
            GuessInput::Command(command) => return Ok(Some(command)),
        };
        let clue = match self.read_clue(&guess)? {
            ClueInput::Clue(clue) => clue,
            ClueInput::Command(command) => return Ok(Some(command)),
        };

        let before = self.session.answers().len();
        self.undo_stack.push(self.session.clone());
        self.session = self.session.clone().apply(guess, clue);
        writeln!(
            self.output,
            "{} {}: {} → {} answers\n",
            guess.text().to_uppercase(),
            clue_to_emoji(&clue),
            before,
            self.session.answers().len()
        )?;
        Ok(None)
    }

    fn print_turn_header(&mut self, suggestion: Option<Word>) -> Result<()> {
        let answers = self.session.answers();
        writeln!(self.output, "{}", "─".repeat(62))?;
        writeln!(
            self.output,
            "Turn {}: {} answers remaining, {} playable guesses",
            self.session.turns_played() + 1,
            answers.len(),
            self.session.guesses().len()
        )?;
        writeln!(self.output, "{}", "─".repeat(62))?;

        if let Some(guess) = suggestion {
            let metrics = GuessMetrics::calculate(&guess, answers);
            writeln!(
                self.output,
                "\n📊 Suggested guess: {}",
                guess.text().to_uppercase().bright_yellow().bold()
            )?;
            writeln!(self.output, "   Entropy:          {:.3} bits", metrics.entropy)?;
            writeln!(
                self.output,
                "   Expected remain:  {:.1} answers",
                metrics.expected_remaining
            )?;
            writeln!(
                self.output,
                "   Worst case:       {} answers\n",
                metrics.max_partition
            )?;
        }

        if answers.len() <= 10 {
            writeln!(self.output, "Remaining answers:")?;
            for answer in answers {
                writeln!(self.output, "  • {}", answer.text().to_uppercase())?;
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn read_guess(&mut self, suggestion: Option<Word>) -> Result<GuessInput> {
        loop {
            let prompt = suggestion.map_or_else(
                || "Guess (or command)".to_string(),
                |s| format!("Guess (Enter for {})", s.text().to_uppercase()),
            );
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(GuessInput::Command(Command::Quit));
            };
            if let Some(command) = Command::parse(&line) {
                return Ok(GuessInput::Command(command));
            }
            if line.is_empty() {
                match suggestion {
                    Some(guess) => return Ok(GuessInput::Guess(guess)),
                    None => {
                        writeln!(self.output, "No suggestion available; type a guess.\n")?;
                        continue;
                    }
                }
            }

            match Word::new(&line) {
                Ok(word) if self.session.accepts(&word) => return Ok(GuessInput::Guess(word)),
                Ok(word) => writeln!(
                    self.output,
                    "❌ '{}' is not in the guess list\n",
                    word.text().to_uppercase()
                )?,
                Err(e) => writeln!(self.output, "❌ {e}\n")?,
            }
        }
    }

    fn read_clue(&mut self, guess: &Word) -> Result<ClueInput> {
        loop {
            let prompt = format!("Clue for {} (G/Y/-, 'win', or command)", guess.text().to_uppercase());
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(ClueInput::Command(Command::Quit));
            };
            if let Some(command) = Command::parse(&line) {
                return Ok(ClueInput::Command(command));
            }
            if matches!(line.as_str(), "win" | "correct" | "yes" | "solved") {
                return Ok(ClueInput::Clue(Clue::PERFECT));
            }

            match line.parse::<Clue>() {
                Ok(clue) => return Ok(ClueInput::Clue(clue)),
                Err(e) => writeln!(self.output, "❌ Invalid clue: {e}. Use G/Y/- or '🟩🟨⬜🟩🟨'\n")?,
            }
        }
    }

    /// Prompt until a command is entered; `None` at end of input
    fn read_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(line) = self.prompt("Enter 'new', 'undo' or 'quit'")? else {
                return Ok(None);
            };
            if let Some(command) = Command::parse(&line) {
                return Ok(Some(command));
            }
        }
    }

    fn print_solved(&mut self, answer: Word) -> Result<()> {
        writeln!(self.output, "\n{}", "═".repeat(62).bright_cyan())?;
        writeln!(
            self.output,
            "  🎉 The answer is {}",
            answer.text().to_uppercase().bright_green().bold()
        )?;
        writeln!(self.output, "{}", "═".repeat(62).bright_cyan())?;

        let history = self.session.history();
        if !history.is_empty() {
            writeln!(self.output, "\n  Guess history:")?;
            for (i, turn) in history.iter().enumerate() {
                writeln!(
                    self.output,
                    "    {}. {} {}",
                    i + 1,
                    turn.guess.text().to_uppercase(),
                    clue_to_emoji(&turn.clue)
                )?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one trimmed, lower-cased line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }
}
