//! quizgrade CLI — presents quizzes in the terminal and reports verdicts.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

mod commands;
mod config;
mod input;

#[derive(Parser)]
#[command(name = "quizgrade", version, about = "Terminal quiz runner and grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz interactively
    Run {
        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a single answer without prompting
    Check {
        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: PathBuf,

        /// 1-based question number
        #[arg(long)]
        question: usize,

        /// The answer, written as it would be typed in `run`
        #[arg(long, allow_hyphen_values = true)]
        answer: String,
    },

    /// Print every question of a quiz
    Show {
        /// Path to a .toml quiz file
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory (defaults to the configured quiz_dir)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and sample quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgrade=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            quiz,
            format,
            config,
        } => commands::run::execute(quiz, format, config),
        Commands::Check {
            quiz,
            question,
            answer,
        } => commands::check::execute(quiz, question, answer),
        Commands::Show { quiz } => commands::show::execute(quiz),
        Commands::Validate { quiz, config } => commands::validate::execute(quiz, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
