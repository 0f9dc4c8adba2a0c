//! Wordle Variants
//!
//! An interactive solver for Wordle, Absurdle and Survivle. Each clue the
//! player enters is folded into a compact knowledge model that prunes the
//! answer list, and a per-mode strategy scores every playable guess by how it
//! partitions the answers that remain.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_variants::core::{Clue, Word};
//! use wordle_variants::solver::{Mode, Session, SessionConfig, SessionStatus};
//! use wordle_variants::wordlists::words_from_slice;
//!
//! let answers = words_from_slice(&["pearl", "algae", "abbey", "raise"]);
//! let session = Session::new(SessionConfig::new(Mode::Wordle, false), answers, &[]).unwrap();
//!
//! let guess = Word::new("raise").unwrap();
//! let clue: Clue = "YY--Y".parse().unwrap();
//! let session = session.apply(guess, clue);
//!
//! assert_eq!(session.status(), SessionStatus::Solved(Word::new("pearl").unwrap()));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
