//! Final score reporting.

use std::fmt;

/// Printed ahead of the score when the deadline ends the quiz.
pub const TIMEOUT_BANNER: &str = "Game over! You ran out of time!";

/// The final tally of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
}

impl ScoreReport {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    /// Percentage of questions answered correctly.
    ///
    /// An empty quiz scores 0% rather than dividing by zero.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.correct as f64 / self.total as f64
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You got {} correct out of {} questions. Your score is {:.2}%",
            self.correct,
            self.total,
            self.percent()
        )
    }
}

/// Format the score line for `correct` answers out of `total` questions.
pub fn report(correct: usize, total: usize) -> String {
    ScoreReport::new(correct, total).to_string()
}
