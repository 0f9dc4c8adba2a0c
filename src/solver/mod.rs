//! Solving algorithms
//!
//! Clue partitioning, the three selection strategies, candidate pruning and
//! the session engine that ties them together.

mod engine;
pub mod partition;
pub mod pruner;
pub mod strategy;

pub use engine::{Session, SessionConfig, SessionError, SessionStatus, Turn};
pub use partition::{GuessMetrics, Partition};
pub use pruner::{CandidatePool, prune};
pub use strategy::{
    Direction, ExpectedSizeStrategy, MinimaxStrategy, Mode, Strategy, SurvivalStrategy,
    select_best_guess,
};
