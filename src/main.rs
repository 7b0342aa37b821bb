//! Evil Hangman - CLI
//!
//! Hangman against an opponent that keeps its word open, with TUI and console
//! modes plus analysis and simulation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{
        DEFAULT_LOG_FILE, DEFAULT_MAX_WRONG, GameConfig, SimpleOptions, analyze_position,
        make_rng, run_simple, run_simulation,
    },
    core::Word,
    output::{print_analysis_result, print_simulation_result},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an opponent that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of wrong guesses allowed
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_WRONG,
        allow_negative_numbers = true
    )]
    guesses: i32,

    /// Word length (random dictionary word length if omitted)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (console game without TUI)
    Simple {
        /// Keep the game log after the game ends
        #[arg(long)]
        keep_log: bool,

        /// Where to write the game log
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,
    },

    /// Show how the opponent would answer each letter in a position
    Analyze {
        /// Letters already guessed, in order
        #[arg(long, default_value = "")]
        history: String,
    },

    /// Play one automated game per word length
    Simulate {
        /// Only play the most common lengths
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the wordlist selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to load wordlist {path}")),
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evil_hangman=warn".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let words = load_wordlist(&cli.wordlist)?;
    tracing::info!(words = words.len(), source = %cli.wordlist, "wordlist loaded");

    let config = GameConfig {
        length: cli.length,
        max_wrong: cli.guesses,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, config, cli.seed),
        Commands::Simple { keep_log, log } => {
            let options = SimpleOptions {
                log_path: log,
                keep_log,
            };
            run_simple(&words, &config, &options, &mut make_rng(cli.seed))
        }
        Commands::Analyze { history } => {
            run_analyze_command(&words, cli.length, cli.guesses, &history)
        }
        Commands::Simulate { limit } => run_simulate_command(&words, cli.guesses, limit),
    }
}

fn run_analyze_command(
    words: &[Word],
    length: Option<usize>,
    max_wrong: i32,
    history: &str,
) -> Result<()> {
    let length = length.context("analyze needs a word length (--length)")?;
    let result = analyze_position(words, length, max_wrong, history)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(words: &[Word], max_wrong: i32, limit: Option<usize>) -> Result<()> {
    println!("Simulating games with {max_wrong} wrong guesses allowed...");
    let result = run_simulation(words, max_wrong, limit, true)?;
    print_simulation_result(&result, max_wrong);
    Ok(())
}

fn run_play_command(words: &[Word], config: GameConfig, seed: Option<u64>) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(words, config, make_rng(seed))?;
    run_tui(app)
}
