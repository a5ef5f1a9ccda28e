//! quizrun CLI — timed terminal quiz runner.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use quizrun_core::QuizError;

mod commands;

const EXIT_INVALID_TIME_LIMIT: i32 = 2;
const EXIT_QUESTION_FILE: i32 = 3;
const EXIT_INTERNAL: i32 = 10;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed terminal quiz runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a timed quiz
    Run {
        /// CSV file of prompt,answer pairs (default: ./problems.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Time limit for the whole quiz in seconds (default: 30)
        #[arg(long)]
        time: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a question file
    Validate {
        /// CSV file of prompt,answer pairs (default: ./problems.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { csv, time, config } => {
            commands::run::execute(csv, time, config).await.map(Some)
        }
        Commands::Validate { csv, config } => {
            commands::validate::execute(csv, config).map(|()| None)
        }
        Commands::Init => commands::init::execute().map(|()| None),
    };

    match result {
        // The input thread may still be parked in a read; don't wait for it.
        Ok(Some(outcome)) if outcome.timed_out() => process::exit(0),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        }
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.chain().find_map(|e| e.downcast_ref::<QuizError>()) {
        Some(QuizError::InvalidTimeLimit(_)) => EXIT_INVALID_TIME_LIMIT,
        Some(e) if e.is_question_source() => EXIT_QUESTION_FILE,
        _ => EXIT_INTERNAL,
    }
}
