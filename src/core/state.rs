//! # Session Snapshots
//!
//! The quiz session never shares its score with the runner. Instead it hands
//! over a fresh `SessionState` value every time something changes:
//!
//! ```text
//! question N:   reveal  { answered: N-1, revealed: Some(N) }
//!               answer  { answered: N,   revealed: None    }
//! after last:   finish  { finished: true }
//! ```
//!
//! Across one session `correct` and `answered` never decrease, `missed` only
//! grows, and `finished` is set on the final snapshot alone.

/// A wrong answer, kept for the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedAnswer {
    /// 1-based position in the question set.
    pub number: usize,
    pub question: String,
    /// What the user typed, already trimmed.
    pub given: String,
    pub expected: String,
}

/// The question currently waiting for input, with its answer.
///
/// Only used to tell the user what they were stuck on if time runs out.
/// It is never shown alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedQuestion {
    pub number: usize,
    pub question: String,
    pub expected: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub correct: usize,
    pub answered: usize,
    pub missed: Vec<MissedAnswer>,
    pub revealed: Option<RevealedQuestion>,
    pub finished: bool,
}
