//! # Quiz Session
//!
//! Walks the question set in order, asks each question through an
//! `AnswerSource` and scores the reply. Progress leaves the session only as
//! `SessionState` values sent over the progress channel.

use log::{debug, info, warn};
use tokio::sync::mpsc::Sender;

use crate::core::{MissedAnswer, QuestionSet, RevealedQuestion, SessionState};
use crate::session::input::AnswerSource;

/// The prompt shown for question `number` (1-based).
pub fn format_prompt(number: usize, question: &str) -> String {
    format!("Problem#{number} : {question} =")
}

pub struct QuizSession<A> {
    questions: QuestionSet,
    answers: A,
    correct: usize,
    answered: usize,
    missed: Vec<MissedAnswer>,
}

impl<A: AnswerSource> QuizSession<A> {
    pub fn new(questions: QuestionSet, answers: A) -> Self {
        Self {
            questions,
            answers,
            correct: 0,
            answered: 0,
            missed: Vec::new(),
        }
    }

    fn snapshot(&self, revealed: Option<RevealedQuestion>, finished: bool) -> SessionState {
        SessionState {
            correct: self.correct,
            answered: self.answered,
            missed: self.missed.clone(),
            revealed,
            finished,
        }
    }

    /// Runs the quiz to the end, or until input runs out or the receiver goes away.
    ///
    /// End of input (or a read error) stops the quiz early; the questions left
    /// are unanswered and unscored, and the final snapshot is still sent.
    pub async fn run(mut self, progress: Sender<SessionState>) {
        info!("Quiz session started with {} questions", self.questions.len());
        let questions = std::mem::take(&mut self.questions);

        for (index, entry) in questions.iter().enumerate() {
            let number = index + 1;
            let prompt = format_prompt(number, &entry.question);

            let reveal = self.snapshot(
                Some(RevealedQuestion {
                    number,
                    question: entry.question.clone(),
                    expected: entry.answer.clone(),
                }),
                false,
            );
            if progress.send(reveal).await.is_err() {
                debug!("Progress receiver dropped, stopping before question {}", number);
                return;
            }

            let given = match self.answers.ask(&prompt).await {
                Ok(Some(line)) => line.trim().to_string(),
                Ok(None) => {
                    warn!("Input closed at question {}, leaving the rest unanswered", number);
                    break;
                }
                Err(e) => {
                    warn!("Failed to read answer for question {}: {}", number, e);
                    break;
                }
            };

            self.answered += 1;
            if entry.is_correct(&given) {
                self.correct += 1;
                debug!("Question {} correct", number);
            } else {
                debug!("Question {} wrong: {:?} != {:?}", number, given, entry.answer);
                self.missed.push(MissedAnswer {
                    number,
                    question: entry.question.clone(),
                    given,
                    expected: entry.answer.clone(),
                });
            }

            if progress.send(self.snapshot(None, false)).await.is_err() {
                debug!("Progress receiver dropped after question {}", number);
                return;
            }
        }

        info!(
            "Quiz session finished: {}/{} correct, {} answered",
            self.correct,
            questions.len(),
            self.answered
        );
        if progress.send(self.snapshot(None, true)).await.is_err() {
            debug!("Progress receiver dropped before final snapshot");
        }
    }
}
