//! # Core Quiz Model
//!
//! Data the quiz works with, independent of how it is presented or timed.
//!
//! ```text
//!   problems.csv ──► loader ──► QuestionSet ──► session (prompts, scoring)
//!                                                   │
//!                                            SessionState snapshots
//!                                                   ▼
//!   config (file/env/CLI)                       runner (deadline race)
//! ```
//!
//! ## Modules
//!
//! - [`question`]: `QuestionEntry` and the ordered `QuestionSet`
//! - [`loader`]: csv file → `QuestionSet`, with `LoadError`
//! - [`state`]: `SessionState` progress snapshots
//! - [`config`]: settings resolved from defaults, config file, env and CLI

pub mod config;
pub mod loader;
pub mod question;
pub mod state;

pub use question::{QuestionEntry, QuestionSet};
pub use state::{MissedAnswer, RevealedQuestion, SessionState};
