//! # Timed Runner
//!
//! Races a quiz session against a single wall-clock deadline.
//!
//! ```text
//!            ┌──────── deadline fires ────────► TimedOut  (latest snapshot)
//! Running ───┤
//!            ├──── snapshot, !finished ──► Running (remember it)
//!            └──── snapshot,  finished ──────► Completed (this snapshot)
//! ```
//!
//! The session runs as its own tokio task and owns the sending half of the
//! progress channel. On timeout the task is aborted, which drops its pending
//! read.

use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::core::{MissedAnswer, QuestionSet, RevealedQuestion, SessionState};
use crate::session::input::AnswerSource;
use crate::session::quiz::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session sent its final snapshot before the deadline.
    Completed,
    /// The deadline fired first.
    TimedOut,
}

/// Everything needed to print the end-of-quiz summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub correct: usize,
    /// Size of the whole question set, answered or not.
    pub total: usize,
    pub answered: usize,
    pub missed: Vec<MissedAnswer>,
    /// The question on screen when time ran out, if any.
    pub unanswered: Option<RevealedQuestion>,
}

impl Report {
    fn from_state(outcome: Outcome, state: SessionState, total: usize) -> Self {
        let unanswered = match outcome {
            Outcome::TimedOut => state.revealed,
            Outcome::Completed => None,
        };
        Self {
            outcome,
            correct: state.correct,
            total,
            answered: state.answered,
            missed: state.missed,
            unanswered,
        }
    }
}

pub struct TimedRunner {
    limit: Duration,
}

impl TimedRunner {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// Starts the quiz and the deadline together and reports whichever ends first.
    pub async fn run<A>(&self, questions: QuestionSet, answers: A) -> Report
    where
        A: AnswerSource + 'static,
    {
        let total = questions.len();
        let (tx, mut rx) = mpsc::channel::<SessionState>(1);

        info!("Starting {}s timed quiz over {} questions", self.limit.as_secs(), total);
        let deadline_at = Instant::now() + self.limit;
        let session = tokio::spawn(QuizSession::new(questions, answers).run(tx));

        let deadline = tokio::time::sleep_until(deadline_at);
        tokio::pin!(deadline);

        let mut latest = SessionState::default();
        let outcome = loop {
            let received = tokio::select! {
                biased;

                _ = &mut deadline => None,
                received = rx.recv() => Some(received),
            };

            // A due deadline beats any snapshot, even one already queued.
            let Some(received) = received.filter(|_| Instant::now() < deadline_at) else {
                info!(
                    "Time is up after {} answers ({} correct)",
                    latest.answered, latest.correct
                );
                session.abort();
                break Outcome::TimedOut;
            };

            match received {
                Some(state) if state.finished => {
                    debug!("Final snapshot: {} correct", state.correct);
                    latest = state;
                    break Outcome::Completed;
                }
                Some(state) => {
                    debug!(
                        "Snapshot: answered={} correct={} revealed={:?}",
                        state.answered,
                        state.correct,
                        state.revealed.as_ref().map(|r| r.number)
                    );
                    latest = state;
                }
                None => {
                    warn!("Quiz session ended without a final snapshot");
                    break Outcome::Completed;
                }
            }
        };

        Report::from_state(outcome, latest, total)
    }
}
