//! Quiz library exports for testing

pub mod core;
pub mod session;
pub mod term;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{QuestionEntry, QuestionSet, SessionState};
pub use crate::session::{AnswerSource, LineAnswers, Outcome, Report, TimedRunner};
