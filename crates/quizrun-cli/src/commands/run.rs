//! The `quizrun run` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizrun_core::config::{load_config_from, parse_time_limit};
use quizrun_core::parser;
use quizrun_runner::{stdin_lines, QuizRunner, SessionOutcome};

pub async fn execute(
    csv: Option<PathBuf>,
    time: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<SessionOutcome> {
    // Load config, then let flags win
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(raw) = &time {
        config.time_limit_secs = parse_time_limit(raw)?;
    }
    if let Some(path) = csv {
        config.questions = path;
    }
    let time_limit = config.time_limit()?;

    let questions = parser::parse_question_set(&config.questions)?;
    for w in parser::validate_question_set(&questions) {
        match w.question {
            Some(n) => tracing::warn!("question #{n}: {}", w.message),
            None => tracing::warn!("{}", w.message),
        }
    }

    let runner = QuizRunner::new(time_limit).with_start_signal(config.wait_for_start);
    let mut input = stdin_lines().context("failed to start the input reader")?;
    let mut out = io::stdout().lock();

    runner.run(&questions, &mut input, &mut out).await
}
