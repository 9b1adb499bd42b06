//! Error types for the edges of the tool
//!
//! The analysis engine itself is total. Errors only arise when reading files,
//! loading configuration or interpreting command-line input.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BigoError>;

#[derive(Error, Debug)]
pub enum BigoError {
  #[error("Failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid configuration: {0}")]
  Config(#[from] serde_json::Error),

  #[error("Invalid ignore pattern '{pattern}': {message}")]
  IgnorePattern { pattern: String, message: String },

  #[error("Unknown complexity class '{0}' (expected e.g. O(1), O(log n), O(n), O(n log n), O(n^2), O(n^3), O(2^n))")]
  UnknownComplexity(String),

  #[error("Unsupported language '{0}' (expected one of: java, python, c, cpp)")]
  UnknownLanguage(String),

  #[error("No code to analyze in {0}")]
  EmptySource(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_messages() {
    let err = BigoError::UnknownLanguage("cobol".to_string());
    assert!(err.to_string().contains("cobol"));
    assert!(err.to_string().contains("python"));

    let err = BigoError::EmptySource("<stdin>".to_string());
    assert_eq!(err.to_string(), "No code to analyze in <stdin>");
  }

  #[test]
  fn test_io_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: BigoError = io.into();
    assert!(matches!(err, BigoError::Io(_)));
  }
}
