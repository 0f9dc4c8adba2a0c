//! Wordle Variants - CLI
//!
//! Interactive solver for Wordle, Absurdle and Survivle with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_variants::{
    commands::{BenchmarkConfig, SolveConfig, analyze_word, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Mode, Session, SessionConfig},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_variants",
    about = "Interactive solver for Wordle, Absurdle and Survivle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: wordle (default), absurdle, survivle
    #[arg(short, long, global = true, default_value = "wordle")]
    mode: Mode,

    /// Guesses must be consistent with every clue so far (always on for survivle)
    #[arg(long, global = true)]
    hard: bool,

    /// Answer list, one word per line
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Extra words that may be guessed but are never answers
    #[arg(short, long, global = true, default_value = "guesses.txt")]
    guesses: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },

    /// Analyze a specific guess against all answers
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of answers to test (all when omitted)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Sample answers at random with this seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override first word (default: the mode's opening)
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let cli = Cli::parse();

    let lists = WordLists::load(&cli.answers, &cli.guesses)?;
    let config = SessionConfig::new(cli.mode, cli.hard);
    let session = Session::new(config, lists.answers, &lists.guess_only)
        .context("Cannot start a session")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple_command(session),
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => run_solve_command(session, &word, verbose, max_guesses),
        Commands::Analyze { word } => run_analyze_command(&session, &word),
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => run_benchmark_command(&session, count, seed, first_word.as_deref()),
    }
}

fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).with_context(|| format!("Invalid word '{text}'"))
}

fn run_solve_command(session: Session, word: &str, verbose: bool, max_guesses: usize) -> Result<()> {
    let mut config = SolveConfig::new(parse_word(word)?);
    config.max_guesses = max_guesses;

    let result = solve_word(&config, session)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(session: &Session, word: &str) -> Result<()> {
    let result = analyze_word(word, session)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    session: &Session,
    count: Option<usize>,
    seed: Option<u64>,
    first_word: Option<&str>,
) -> Result<()> {
    let config = BenchmarkConfig {
        count,
        seed,
        first_word: first_word.map(parse_word).transpose()?,
        ..BenchmarkConfig::default()
    };

    let total = count.map_or(session.answers().len(), |n| n.min(session.answers().len()));
    match first_word {
        Some(word) => println!(
            "Running {} benchmark on {total} words with forced first word: {word}...",
            session.config().mode
        ),
        None => println!(
            "Running {} benchmark on {total} words...",
            session.config().mode
        ),
    }

    let result = run_benchmark(session, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(session: Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(session, &mut stdin.lock(), &mut stdout)
}

fn run_play_command(session: Session) -> Result<()> {
    use wordle_variants::interactive::{App, run_tui};

    run_tui(App::new(session))
}
