//! Flat-file persistence for user-taught question/answer pairs.
//!
//! One record per line, `question|answer`. The file is only ever appended
//! to; on load, later lines overwrite earlier ones with the same question.
//! There is no escaping: a record containing `|` or a line break cannot be
//! stored, and the engine keeps such pairs in memory only. A hand-edited line
//! with extra separators is skipped on load. Writers in separate processes
//! are not coordinated.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::lexicon::phrase_key;

/// Field separator in the training file.
pub const SEPARATOR: char = '|';

/// Default training file name, relative to the working directory.
pub const DEFAULT_TRAINING_FILE: &str = "training_data.txt";

/// A persisted question → answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
    /// Lowercased, trimmed question.
    pub question: String,
    /// Trimmed answer, case preserved.
    pub answer: String,
}

impl TrainingRecord {
    /// Build a record, normalizing both sides. Returns `None` when either
    /// side is blank.
    pub fn new(question: &str, answer: &str) -> Option<Self> {
        let question = phrase_key(question);
        let answer = answer.trim().to_string();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self { question, answer })
    }

    /// Parse one line of the training file.
    ///
    /// The line must split into exactly two parts on `|`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split(SEPARATOR);
        let (Some(question), Some(answer), None) = (parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        Self::new(question, answer)
    }

    /// Whether this record survives a write/load cycle unchanged.
    pub fn is_reloadable(&self) -> bool {
        let splits = |c: char| c == SEPARATOR || c == '\n' || c == '\r';
        !self.question.contains(splits) && !self.answer.contains(splits)
    }
}

impl std::fmt::Display for TrainingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.question, self.answer)
    }
}

/// Append-only training file.
#[derive(Debug, Clone)]
pub struct TrainingStore {
    path: PathBuf,
}

impl TrainingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every well-formed record in file order.
    ///
    /// A missing file is an empty store. Malformed lines are dropped.
    pub fn load_all(&self) -> StoreResult<Vec<TrainingRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        let mut records = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            match TrainingRecord::parse_line(line) {
                Some(record) => records.push(record),
                None if line.trim().is_empty() => {}
                None => tracing::debug!(line = lineno + 1, "skipping malformed training record"),
            }
        }
        Ok(records)
    }

    /// Append one record, creating the file if needed.
    pub fn append(&self, record: &TrainingRecord) -> StoreResult<()> {
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{record}").map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_accepts_two_parts() {
        let record = TrainingRecord::parse_line("  Favorite Color |  Blue ").unwrap();
        assert_eq!(record.question, "favorite color");
        assert_eq!(record.answer, "Blue");
    }

    #[test]
    fn parse_line_rejects_wrong_part_count() {
        assert!(TrainingRecord::parse_line("onlyonepart").is_none());
        assert!(TrainingRecord::parse_line("a|b|c").is_none());
        assert!(TrainingRecord::parse_line("").is_none());
    }

    #[test]
    fn parse_line_rejects_blank_sides() {
        assert!(TrainingRecord::parse_line("question|").is_none());
        assert!(TrainingRecord::parse_line("  |answer").is_none());
    }

    #[test]
    fn display_is_line_format() {
        let record = TrainingRecord::new("Q", "A").unwrap();
        assert_eq!(record.to_string(), "q|A");
    }

    #[test]
    fn separator_in_answer_is_not_reloadable() {
        let record = TrainingRecord::new("q", "a | b").unwrap();
        assert!(!record.is_reloadable());
        assert!(TrainingRecord::parse_line(&record.to_string()).is_none());
    }

    #[test]
    fn line_breaks_are_not_reloadable() {
        assert!(!TrainingRecord::new("foo\nbar", "baz").unwrap().is_reloadable());
        assert!(!TrainingRecord::new("q", "one\r\ntwo").unwrap().is_reloadable());
        assert!(TrainingRecord::new("q", "plain answer").unwrap().is_reloadable());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TrainingStore::new(dir.path().join("absent.txt"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn append_creates_and_never_truncates() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TrainingStore::new(dir.path().join("training.txt"));

        store.append(&TrainingRecord::new("one", "1").unwrap()).unwrap();
        store.append(&TrainingRecord::new("two", "2").unwrap()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "one|1\ntwo|2\n");

        let records = store.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].question, "two");
    }

    #[test]
    fn load_skips_malformed_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("training.txt");
        fs::write(&path, "onlyonepart\na|b|c\n\ngood|Answer\n").unwrap();

        let records = TrainingStore::new(&path).load_all().unwrap();
        assert_eq!(records, vec![TrainingRecord::new("good", "Answer").unwrap()]);
    }

    #[test]
    fn append_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TrainingStore::new(dir.path().join("no/such/dir/training.txt"));
        let err = store.append(&TrainingRecord::new("q", "a").unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }
}
