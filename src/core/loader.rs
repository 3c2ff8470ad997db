//! # Question Loader
//!
//! Turns a `.csv` file into a `QuestionSet`.
//!
//! Row shape: every field except the last is concatenated (no separator)
//! into the question text, and the last field is the answer.
//!
//! ```text
//! 5+5,10            → ("5+5", "10")
//! what is,1+1,2     → ("what is1+1", "2")
//! ```
//!
//! Every row must carry the same number of fields as the first one, and at
//! least two. Anything else aborts the load before a quiz starts.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::question::{QuestionEntry, QuestionSet};

/// Extension a question file must carry.
pub const QUESTION_FILE_EXTENSION: &str = "csv";

#[derive(Debug)]
pub enum LoadError {
    /// File name isn't of the form `<name>.csv`.
    InvalidFileName(String),
    /// File couldn't be opened for reading.
    Open { path: PathBuf, source: std::io::Error },
    /// The csv reader rejected a row (bad quoting, inconsistent field count, I/O).
    Malformed(csv::Error),
    /// A row with a single field has no question to ask.
    TooFewFields { row: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidFileName(name) => write!(
                f,
                "Invalid file format '{name}', should have format problems.csv"
            ),
            LoadError::Open { path, source } => write!(
                f,
                "Could not open {}. Please check if this is a valid file ({source})",
                path.display()
            ),
            LoadError::Malformed(e) => write!(f, "malformed question file: {e}"),
            LoadError::TooFewFields { row } => {
                write!(f, "row {row} needs at least a question and an answer")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Open { source, .. } => Some(source),
            LoadError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Malformed(e)
    }
}

/// Checks the file name is exactly `<stem>.csv`.
///
/// Only the final path component is inspected, so `data/problems.csv` is fine
/// but `problems`, `problems.txt` and `problems.old.csv` are not.
pub fn validate_file_name(path: &Path) -> Result<(), LoadError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoadError::InvalidFileName(path.display().to_string()))?;

    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        [stem, ext] if !stem.is_empty() && *ext == QUESTION_FILE_EXTENSION => Ok(()),
        _ => Err(LoadError::InvalidFileName(name.to_string())),
    }
}

/// Parses question rows from any reader. No header row is expected.
pub fn parse_questions<R: Read>(reader: R) -> Result<QuestionSet, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        let fields: Vec<&str> = record.iter().collect();
        let Some((answer, leading)) = fields
            .split_last()
            .filter(|(_, leading)| !leading.is_empty())
        else {
            return Err(LoadError::TooFewFields { row });
        };

        let question = leading.concat();
        debug!("Row {}: question={:?} answer={:?}", row, question, answer);
        entries.push(QuestionEntry::new(question, *answer));
    }

    Ok(QuestionSet::new(entries))
}

/// Validates the name, opens the file and parses every row.
pub fn load_questions(path: &Path) -> Result<QuestionSet, LoadError> {
    validate_file_name(path)?;

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(file)?;

    info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_accepts_two_part_csv_name() {
        assert!(validate_file_name(Path::new("problems.csv")).is_ok());
        assert!(validate_file_name(Path::new("quizzes/capitals.csv")).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        for name in ["problems", "problems.txt", "problems.old.csv", ".csv"] {
            let err = validate_file_name(Path::new(name)).unwrap_err();
            assert!(matches!(err, LoadError::InvalidFileName(_)), "{name}");
            assert!(err.to_string().contains("should have format problems.csv"));
        }
    }

    #[test]
    fn test_parse_simple_rows() {
        let set = parse_questions("5+5,10\n7+3,10\n".as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(&QuestionEntry::new("5+5", "10")));
        assert_eq!(set.get(1), Some(&QuestionEntry::new("7+3", "10")));
    }

    #[test]
    fn test_leading_fields_concatenate_into_question() {
        let set = parse_questions("what is,1+1,2\nhow many,legs,4\n".as_bytes()).unwrap();
        assert_eq!(set.get(0), Some(&QuestionEntry::new("what is1+1", "2")));
        assert_eq!(set.get(1), Some(&QuestionEntry::new("how manylegs", "4")));
    }

    #[test]
    fn test_quoted_field_keeps_comma() {
        let set = parse_questions("\"1,2,3 summed\",6\n".as_bytes()).unwrap();
        assert_eq!(set.get(0), Some(&QuestionEntry::new("1,2,3 summed", "6")));
    }

    #[test]
    fn test_single_field_row_is_rejected() {
        let err = parse_questions("lonely\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::TooFewFields { row: 1 }));
    }

    #[test]
    fn test_uneven_rows_are_malformed() {
        let err = parse_questions("1+1,2\na,b,c\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_empty_input_gives_empty_set() {
        let set = parse_questions("".as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "2+2,4").unwrap();
        writeln!(file, "capital of France,Paris").unwrap();

        let set = load_questions(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|e| e.answer.as_str()), Some("Paris"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("Could not open"));
    }
}
