//! # Questions
//!
//! A `QuestionSet` is the ordered list of question/answer pairs a quiz walks
//! through. Insertion order is presentation order. Nothing mutates a set once
//! the loader has built it.

/// One question and the answer it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionEntry {
    pub question: String,
    pub answer: String,
}

impl QuestionEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Exact match after trimming surrounding whitespace from the given answer.
    /// Case and inner whitespace are significant.
    pub fn is_correct(&self, given: &str) -> bool {
        given.trim() == self.answer
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    entries: Vec<QuestionEntry>,
}

impl QuestionSet {
    pub fn new(entries: Vec<QuestionEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionEntry> {
        self.entries.iter()
    }
}

impl From<Vec<QuestionEntry>> for QuestionSet {
    fn from(entries: Vec<QuestionEntry>) -> Self {
        Self::new(entries)
    }
}
