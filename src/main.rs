//! Zahlentrainer - German Numbers Drill
//!
//! Listen mode speaks a number and expects digits, speak mode shows digits
//! and expects the German word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zahlentrainer::config::Config;
use zahlentrainer::tts::{self, TtsEngine};
use zahlentrainer::{normalize, to_german, Mode, Outcome, Quiz, Round};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the German word for a number
    Spell {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the normalized form of an answer
    Normalize { text: String },
    /// Check one answer for a number
    Check {
        #[arg(short, long, value_enum, default_value_t = Mode::Speak)]
        mode: Mode,
        #[arg(allow_negative_numbers = true)]
        number: i64,
        answer: String,
    },
    /// Practice interactively on the terminal
    Drill {
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,
        /// Stop after this many answered rounds
        #[arg(short, long)]
        rounds: Option<usize>,
        /// Seed for a reproducible number sequence
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Setup logging
    let level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    debug!("Loaded config: {:?}", config);

    match args.command {
        Cmd::Spell { number } => println!("{}", to_german(number)?),
        Cmd::Normalize { text } => println!("{}", normalize(&text)),
        Cmd::Check {
            mode,
            number,
            answer,
        } => {
            let mut round = Round::new(number, mode)?;
            let outcome = round.check(&answer)?;
            println!("{}", describe(&outcome, config.near_miss_threshold));
        }
        Cmd::Drill { mode, rounds, seed } => {
            let mode = mode.unwrap_or(config.default_mode);
            let quiz = match seed {
                Some(seed) => Quiz::seeded(mode, seed),
                None => Quiz::from_entropy(mode),
            };
            let engine = tts::create_engine(&config);
            drill(quiz, engine.as_ref(), rounds, config.near_miss_threshold).await?;
        }
    }

    Ok(())
}

async fn drill(
    mut quiz: Quiz,
    engine: &dyn TtsEngine,
    limit: Option<usize>,
    near_miss: f64,
) -> Result<()> {
    info!("🇩🇪 Zahlentrainer v{} starting...", env!("CARGO_PKG_VERSION"));
    println!("Commands: :listen  :speak  :repeat  :skip  :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut answered = 0;

    present(&quiz, engine).await?;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            ":listen" => {
                quiz.set_mode(Mode::Listen);
                present(&quiz, engine).await?;
            }
            ":speak" => {
                quiz.set_mode(Mode::Speak);
                present(&quiz, engine).await?;
            }
            ":repeat" => present(&quiz, engine).await?,
            ":skip" => {
                quiz.next_round();
                present(&quiz, engine).await?;
            }
            answer => {
                let outcome = quiz.check(answer)?;
                println!("{}", describe(&outcome, near_miss));
                if outcome.is_final() {
                    answered += 1;
                    if limit.is_some_and(|limit| answered >= limit) {
                        break;
                    }
                    quiz.next_round();
                    present(&quiz, engine).await?;
                }
            }
        }
    }

    Ok(())
}

/// Show or speak the active round's prompt
async fn present(quiz: &Quiz, engine: &dyn TtsEngine) -> Result<()> {
    let round = quiz.round();
    match round.mode() {
        Mode::Listen => {
            println!("🎧 Listen and type the digits:");
            tts::speak_number(engine, round.target()).await?;
        }
        Mode::Speak => {
            println!("🗣️ Write in German: {}", round.prompt()?);
        }
    }
    Ok(())
}

fn describe(outcome: &Outcome, near_miss: f64) -> String {
    match outcome {
        Outcome::Correct => "✓ Correct!".to_string(),
        Outcome::Incorrect {
            expected,
            similarity,
        } if *similarity >= near_miss => {
            format!("✗ Almost. Correct answer: {}", expected)
        }
        Outcome::Incorrect { expected, .. } => format!("✗ Incorrect. Correct answer: {}", expected),
        Outcome::Empty => "Please type an answer".to_string(),
        Outcome::NotANumber => "Please type digits only".to_string(),
    }
}
