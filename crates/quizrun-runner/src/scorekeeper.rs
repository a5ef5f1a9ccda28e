//! The scorekeeper: sole owner of a session's tally.
//!
//! Answers from the question loop and the deadline from the timer both
//! arrive as messages on one channel, so the tally has a single writer and
//! the first terminal message decides how the session ends. Anything sent
//! after that is discarded, and an answer's sender is told it did not count.

use tokio::sync::{mpsc, oneshot};

use quizrun_core::model::{SessionStatus, Tally};
use quizrun_core::report::ScoreReport;

#[derive(Debug)]
enum ScoreEvent {
    Answered { correct: bool, ack: oneshot::Sender<()> },
    Expired,
    Exhausted,
}

/// How a session ended and what it scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Either `TimedOut` or `Completed`.
    pub status: SessionStatus,
    pub tally: Tally,
    /// Number of questions in the set, answered or not.
    pub total: usize,
}

impl SessionOutcome {
    pub fn report(&self) -> ScoreReport {
        ScoreReport::new(self.tally.correct, self.total)
    }

    pub fn timed_out(&self) -> bool {
        self.status == SessionStatus::TimedOut
    }
}

/// Sending side of the scorekeeper. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ScoreHandle {
    tx: mpsc::UnboundedSender<ScoreEvent>,
}

impl ScoreHandle {
    /// Record one evaluated answer.
    ///
    /// Returns `false` if the session had already ended and the answer was
    /// not counted.
    pub async fn answered(&self, correct: bool) -> bool {
        let (ack, recorded) = oneshot::channel();
        self.send(ScoreEvent::Answered { correct, ack });
        recorded.await.is_ok()
    }

    /// The deadline fired.
    pub fn expire(&self) {
        self.send(ScoreEvent::Expired);
    }

    /// Every question has been answered.
    pub fn exhausted(&self) {
        self.send(ScoreEvent::Exhausted);
    }

    fn send(&self, event: ScoreEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("session already over, ignoring {:?}", e.0);
        }
    }
}

/// Receives the outcome once the session ends.
pub type OutcomeReceiver = oneshot::Receiver<SessionOutcome>;

/// Spawn a scorekeeper for a quiz of `total` questions.
pub fn spawn(total: usize) -> (ScoreHandle, OutcomeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let (outcome_tx, outcome_rx) = oneshot::channel();
    tokio::spawn(keep_score(rx, total, outcome_tx));
    (ScoreHandle { tx }, outcome_rx)
}

async fn keep_score(
    mut rx: mpsc::UnboundedReceiver<ScoreEvent>,
    total: usize,
    outcome_tx: oneshot::Sender<SessionOutcome>,
) {
    let mut tally = Tally::default();

    let status = loop {
        match rx.recv().await {
            Some(ScoreEvent::Answered { correct, ack }) => {
                tally.record(correct);
                let _ = ack.send(());
                tracing::debug!(
                    correct = tally.correct,
                    wrong = tally.wrong,
                    total,
                    "answer recorded"
                );
            }
            Some(ScoreEvent::Expired) => break SessionStatus::TimedOut,
            Some(ScoreEvent::Exhausted) => break SessionStatus::Completed,
            None => {
                tracing::warn!("every score handle dropped before the session ended");
                return;
            }
        }
    };

    // Sealed: later answers or a late deadline are refused at the sender.
    rx.close();

    tracing::info!(
        %status,
        correct = tally.correct,
        wrong = tally.wrong,
        total,
        "session finished"
    );

    let outcome = SessionOutcome {
        status,
        tally,
        total,
    };
    if outcome_tx.send(outcome).is_err() {
        tracing::warn!("nobody is waiting for the session outcome");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completed_session_counts_every_answer() {
        let (scores, outcome) = spawn(3);
        assert!(scores.answered(true).await);
        assert!(scores.answered(false).await);
        assert!(scores.answered(true).await);
        scores.exhausted();

        let outcome = outcome.await.unwrap();
        assert_eq!(outcome.status, SessionStatus::Completed);
        assert_eq!(outcome.tally, Tally { correct: 2, wrong: 1 });
        assert_eq!(outcome.total, 3);
        assert!(!outcome.timed_out());
        assert_eq!(
            outcome.report().to_string(),
            "You got 2 correct out of 3 questions. Your score is 66.67%"
        );
    }

    #[tokio::test]
    async fn expiry_seals_the_tally() {
        let (scores, outcome) = spawn(5);
        assert!(scores.answered(true).await);
        scores.expire();
        assert!(!scores.answered(true).await);
        assert!(!scores.answered(false).await);
        scores.exhausted();

        let outcome = outcome.await.unwrap();
        assert_eq!(outcome.status, SessionStatus::TimedOut);
        assert_eq!(outcome.tally.answered(), 1);
        assert_eq!(outcome.tally.correct, 1);
    }

    #[tokio::test]
    async fn answer_queued_behind_expiry_is_refused() {
        let (scores, outcome) = spawn(3);
        scores.expire();
        let pending = scores.answered(true);

        assert!(!pending.await);
        let outcome = outcome.await.unwrap();
        assert!(outcome.timed_out());
        assert_eq!(outcome.tally.answered(), 0);
    }

    #[tokio::test]
    async fn first_terminal_event_wins() {
        let (scores, outcome) = spawn(0);
        scores.exhausted();
        scores.expire();

        let outcome = outcome.await.unwrap();
        assert_eq!(outcome.status, SessionStatus::Completed);
        assert_eq!(outcome.report().percent(), 0.0);
    }

    #[tokio::test]
    async fn dropping_every_handle_aborts_the_session() {
        let (scores, outcome) = spawn(2);
        assert!(scores.answered(true).await);
        drop(scores);

        assert!(outcome.await.is_err());
    }

    #[tokio::test]
    async fn sends_after_the_end_are_harmless() {
        let (scores, outcome) = spawn(1);
        let late = scores.clone();
        scores.expire();
        let outcome = outcome.await.unwrap();
        assert!(outcome.timed_out());

        assert!(!late.answered(true).await);
        late.expire();
    }
}
