//! Core data model types for quizrun.
//!
//! A quiz run is driven by an immutable [`QuestionSet`]; the only mutable
//! state is the [`Tally`], which belongs to whoever coordinates the session.

use std::fmt;

/// A single prompt and the answer expected for it.
///
/// Questions have no identity beyond their position in a [`QuestionSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text shown to the operator.
    pub prompt: String,
    /// Answer compared against the operator's submission.
    pub expected_answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }
}

/// The ordered questions for one quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    /// Where the questions were loaded from (file path or a label).
    pub source: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(source: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            source: source.into(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl FromIterator<(String, String)> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let questions = iter
            .into_iter()
            .map(|(prompt, answer)| Question::new(prompt, answer))
            .collect();
        Self::new("inline", questions)
    }
}

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Constructed, waiting for the start signal.
    Idle,
    /// Timer armed, questions being asked.
    Running,
    /// The deadline fired before every question was answered.
    TimedOut,
    /// Every question was answered before the deadline.
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Idle => write!(f, "idle"),
            SessionStatus::Running => write!(f, "running"),
            SessionStatus::TimedOut => write!(f, "timed out"),
            SessionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Right and wrong answer counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub wrong: usize,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.correct + self.wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_set_keeps_order() {
        let set: QuestionSet = [("2+2", "4"), ("3+3", "6")]
            .into_iter()
            .map(|(p, a)| (p.to_string(), a.to_string()))
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().prompt, "2+2");
        assert_eq!(set.get(1).unwrap().expected_answer, "6");
        assert!(set.get(2).is_none());
    }

    #[test]
    fn tally_counts_both_outcomes() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally.correct, 2);
        assert_eq!(tally.wrong, 1);
        assert_eq!(tally.answered(), 3);
    }

    #[test]
    fn status_display() {
        assert_eq!(SessionStatus::Idle.to_string(), "idle");
        assert_eq!(SessionStatus::TimedOut.to_string(), "timed out");
        assert_eq!(SessionStatus::Completed.to_string(), "completed");
    }
}
