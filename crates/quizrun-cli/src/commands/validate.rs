//! The `quizrun validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizrun_core::config::load_config_from;
use quizrun_core::parser;

pub fn execute(csv: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = csv.unwrap_or(config.questions);

    let set = parser::parse_question_set(&path)?;
    println!("Question set: {} ({} questions)", set.source, set.len());

    let warnings = parser::validate_question_set(&set);
    for w in &warnings {
        let prefix = w
            .question
            .map(|n| format!("  [#{n}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
