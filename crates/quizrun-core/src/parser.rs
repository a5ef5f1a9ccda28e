//! CSV question file parser.
//!
//! Loads question sets from `prompt,answer` CSV files, and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::QuizError;
use crate::evaluate::is_blank;
use crate::model::{Question, QuestionSet};

/// Parse a CSV file into a `QuestionSet`.
pub fn parse_question_set(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path).map_err(|source| QuizError::QuestionFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_question_set_str(&content, path)
}

/// Parse CSV text into a `QuestionSet` (useful for testing).
pub fn parse_question_set_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut questions = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| QuizError::MalformedRecord {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                reason: e.to_string(),
            })
            .with_context(|| format!("failed to parse CSV: {}", source_path.display()))?;

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != 2 {
            return Err(QuizError::MalformedRecord {
                line,
                reason: format!("expected 2 fields, found {}", record.len()),
            })
            .with_context(|| format!("failed to parse CSV: {}", source_path.display()));
        }

        questions.push(Question::new(&record[0], &record[1]));
    }

    tracing::debug!(
        "loaded {} questions from {}",
        questions.len(),
        source_path.display()
    );

    Ok(QuestionSet::new(
        source_path.display().to_string(),
        questions,
    ))
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question set for common issues.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if set.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "question set is empty".into(),
        });
    }

    let mut seen_prompts = HashSet::new();
    for (i, q) in set.iter().enumerate() {
        let number = Some(i + 1);

        if is_blank(&q.prompt) {
            warnings.push(ValidationWarning {
                question: number,
                message: "prompt is empty".into(),
            });
        } else if !seen_prompts.insert(q.prompt.trim()) {
            warnings.push(ValidationWarning {
                question: number,
                message: format!("duplicate prompt: {}", q.prompt.trim()),
            });
        }

        // Blank submissions are re-asked, so this one can never be scored correct.
        if is_blank(&q.expected_answer) {
            warnings.push(ValidationWarning {
                question: number,
                message: "expected answer is empty".into(),
            });
        }
    }

    warnings
}
