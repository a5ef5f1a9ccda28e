//! quizrun-runner — Deadline-bound interactive quiz runner.
//!
//! Asks questions one at a time on the foreground task while a deadline
//! timer runs in the background. Scores are kept by a separate actor task
//! (see [`scorekeeper`]) so the question loop and the timer never share
//! mutable state.

pub mod input;
pub mod scorekeeper;
pub mod timer;

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use quizrun_core::evaluate::{evaluate, is_blank};
use quizrun_core::model::{QuestionSet, SessionStatus};
use quizrun_core::report::TIMEOUT_BANNER;
use quizrun_core::QuizError;

pub use input::{spawn_line_reader, stdin_lines, LineRead, LineReceiver};
pub use scorekeeper::SessionOutcome;
pub use timer::DeadlineTimer;

/// Shown before waiting for the start signal.
pub const START_BANNER: &str = "Press the enter key to start the quiz!";

/// Shown when an answer could not be read and the question is asked again.
pub const READ_FAILURE_NOTICE: &str = "A problem occurred reading your last answer. Try again";

/// Runs one quiz session against a question set.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    /// Wall-clock limit for the whole quiz, starting after the start signal.
    time_limit: Duration,
    /// Wait for one line of input before arming the timer.
    wait_for_start: bool,
}

impl QuizRunner {
    pub fn new(time_limit: Duration) -> Self {
        Self {
            time_limit,
            wait_for_start: true,
        }
    }

    pub fn with_start_signal(mut self, wait_for_start: bool) -> Self {
        self.wait_for_start = wait_for_start;
        self
    }

    /// Run the quiz, writing the dialogue and final score to `out`.
    ///
    /// Returns once the session has ended and its score line is written.
    /// After a timeout the caller should terminate without reading `input`
    /// again.
    pub async fn run<W: Write>(
        &self,
        questions: &QuestionSet,
        input: &mut LineReceiver,
        out: &mut W,
    ) -> Result<SessionOutcome> {
        let total = questions.len();
        tracing::debug!(status = %SessionStatus::Idle, total, "quiz session created");

        if self.wait_for_start {
            writeln!(out, "{START_BANNER}")?;
            out.flush()?;
            match input.recv().await {
                Some(LineRead::Line(_)) => {}
                Some(LineRead::Failed(reason)) => {
                    tracing::debug!("start signal unreadable ({reason}), starting anyway");
                }
                None => tracing::debug!("input closed before start, starting anyway"),
            }
        }

        let (scores, mut outcome_rx) = scorekeeper::spawn(total);
        let timer = {
            let scores = scores.clone();
            DeadlineTimer::arm(self.time_limit, move || scores.expire())
        };
        tracing::info!(
            status = %SessionStatus::Running,
            total,
            "quiz started with a {}s limit",
            self.time_limit.as_secs_f64()
        );

        let mut cursor = 0;
        let mut input_closed = false;
        let mut ended_early = None;

        while let Some(question) = questions.get(cursor) {
            write!(out, "{} ", question.prompt)?;
            out.flush()?;
            if input_closed {
                break;
            }

            let read = tokio::select! {
                biased;
                outcome = &mut outcome_rx => {
                    ended_early = Some(outcome);
                    break;
                }
                read = input.recv() => read,
            };

            match read {
                Some(LineRead::Line(answer)) if !is_blank(&answer) => {
                    let correct = evaluate(&question.expected_answer, &answer);
                    tracing::debug!(question = cursor + 1, correct, "answer evaluated");
                    if !scores.answered(correct).await {
                        tracing::debug!(
                            question = cursor + 1,
                            "answer arrived after the deadline"
                        );
                        break;
                    }
                    cursor += 1;
                }
                Some(LineRead::Line(_)) => {
                    tracing::warn!(question = cursor + 1, "blank answer, asking again");
                    writeln!(out, "{READ_FAILURE_NOTICE}")?;
                }
                Some(LineRead::Failed(reason)) => {
                    tracing::warn!(
                        question = cursor + 1,
                        "unreadable answer ({reason}), asking again"
                    );
                    writeln!(out, "{READ_FAILURE_NOTICE}")?;
                }
                None => {
                    tracing::warn!(
                        question = cursor + 1,
                        "input closed, waiting for the deadline"
                    );
                    writeln!(out, "{READ_FAILURE_NOTICE}")?;
                    input_closed = true;
                }
            }
        }

        let outcome = match ended_early {
            Some(outcome) => outcome,
            None => {
                // Questions left means input closed or the deadline already won.
                if cursor == total {
                    scores.exhausted();
                }
                (&mut outcome_rx).await
            }
        };
        timer.stop();
        let outcome = outcome.map_err(|_| QuizError::SessionAborted)?;

        if outcome.timed_out() {
            writeln!(out)?;
            writeln!(out, "{TIMEOUT_BANNER}")?;
        }
        writeln!(out, "{}", outcome.report())?;
        out.flush()?;

        Ok(outcome)
    }
}
