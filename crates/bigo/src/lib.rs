//! Heuristic time and space complexity classification for code snippets
//!
//! The engine reads source text the way a reviewer skims it: loop headers,
//! self-calls, algorithm vocabulary and library calls. It does not parse.
//!
//! ```
//! use bigo::{analyze, ComplexityClass, SourceLanguage};
//!
//! let code = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    total += i * j;\n  }\n}";
//! let result = analyze(code, SourceLanguage::C);
//! assert_eq!(result.time_complexity, ComplexityClass::Quadratic);
//! ```

pub mod analyzer;
pub mod builtins;
pub mod config;
pub mod directives;
pub mod error;
pub mod explanation;
pub mod language;
pub mod lattice;
pub mod loops;
pub mod patterns;
pub mod recursion;
pub mod report;
pub mod space;

pub use analyzer::{analyze, BreakdownItem, ComplexityAnalyzer, ComplexityResult};
pub use config::{Config, OutputFormat};
pub use error::{BigoError, Result};
pub use language::SourceLanguage;
pub use lattice::{worse_of, ComplexityClass};

use std::path::Path;

/// Read, preprocess and analyze one file.
///
/// Returns `Ok(None)` when the file carries a `bigo ignore file` directive.
pub fn analyze_file<P: AsRef<Path>>(path: P, language: SourceLanguage) -> Result<Option<ComplexityResult>> {
  let path = path.as_ref();
  let content =
    std::fs::read_to_string(path).map_err(|source| BigoError::Read { path: path.to_path_buf(), source })?;
  analyze_source(&content, language, &path.display().to_string())
}

/// Preprocess ignore directives and analyze `content`; `origin` names it in errors
pub fn analyze_source(content: &str, language: SourceLanguage, origin: &str) -> Result<Option<ComplexityResult>> {
  let Some(preprocessed) = directives::preprocess(content) else {
    tracing::debug!(origin, "ignored by directive");
    return Ok(None);
  };

  if preprocessed.trim().is_empty() {
    return Err(BigoError::EmptySource(origin.to_string()));
  }

  Ok(Some(analyze(&preprocessed, language)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn test_analyze_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sum.py");
    fs::write(&path, "for i in range(n):\n    total += i\n").unwrap();

    let result = analyze_file(&path, SourceLanguage::Python).unwrap().unwrap();
    assert_eq!(result.time_complexity, ComplexityClass::Linear);
  }

  #[test]
  fn test_analyze_file_missing() {
    let result = analyze_file("does/not/exist.py", SourceLanguage::Python);
    assert!(matches!(result, Err(BigoError::Read { .. })));
  }

  #[test]
  fn test_analyze_source_respects_directives() {
    let content = format!("// bigo ignore {}\nfor (int i = 0; i < n; i++) {{\n}}\nint x = 1;", "line");
    let result = analyze_source(&content, SourceLanguage::C, "inline").unwrap().unwrap();
    assert_eq!(result.time_complexity, ComplexityClass::Constant);

    let ignored = format!("// bigo ignore {}\nwhile (x) {{}}", "file");
    assert_eq!(analyze_source(&ignored, SourceLanguage::C, "inline").unwrap(), None);
  }

  #[test]
  fn test_analyze_source_rejects_blank_input() {
    let result = analyze_source("  \n\n", SourceLanguage::Java, "<stdin>");
    assert!(matches!(result, Err(BigoError::EmptySource(origin)) if origin == "<stdin>"));
  }
}
