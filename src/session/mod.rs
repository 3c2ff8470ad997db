//! # Quiz Session and Deadline Race
//!
//! Two concurrent activities joined by one progress channel:
//!
//! ```text
//!  ┌──────────────────┐  SessionState (mpsc, cap 1)  ┌──────────────────┐
//!  │   QuizSession    │ ───────────────────────────► │   TimedRunner    │
//!  │  (spawned task)  │                              │  select! {       │
//!  │  prompt → read   │                              │    deadline,     │
//!  │  → score → send  │ ◄──────── abort() ────────── │    snapshot }    │
//!  └──────────────────┘         on timeout           └──────────────────┘
//! ```
//!
//! The session and the runner share no mutable state; the runner only ever
//! sees owned snapshots.

pub mod input;
pub mod quiz;
pub mod runner;

pub use input::{AnswerSource, LineAnswers};
pub use quiz::{QuizSession, format_prompt};
pub use runner::{Outcome, Report, TimedRunner};
