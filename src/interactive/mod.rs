//! Full-screen interactive interface

mod app;
mod rendering;

pub use app::{App, GuessInfo, InputMode, Message, MessageStyle, Statistics, run_tui};
