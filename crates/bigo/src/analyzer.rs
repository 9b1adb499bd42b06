//! Analysis orchestration
//!
//! Runs every detector over one snippet, merges their verdicts through the
//! lattice and assembles the [`ComplexityResult`]. Each call owns all of its
//! working state, so concurrent calls need no coordination.

use serde::{Deserialize, Serialize};

use crate::builtins::detect_builtins;
use crate::explanation::explain;
use crate::language::SourceLanguage;
use crate::lattice::{worse_of, ComplexityClass};
use crate::loops::analyze_loops;
use crate::patterns::{detect_algorithm, normalize};
use crate::recursion::RecursionFindings;
use crate::space::estimate_space;

/// One detector's contribution to the verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
  pub operation: String,
  pub complexity: ComplexityClass,
  pub description: String,
}

impl BreakdownItem {
  pub fn new(operation: impl Into<String>, complexity: ComplexityClass, description: impl Into<String>) -> Self {
    Self { operation: operation.into(), complexity, description: description.into() }
  }
}

/// Verdict for one snippet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityResult {
  pub time_complexity: ComplexityClass,
  pub space_complexity: ComplexityClass,
  pub explanation: String,
  /// Detector findings in invocation order: pattern, loops, recursion, builtins
  pub breakdown: Vec<BreakdownItem>,
}

/// Source prepared once and shared by every detector of a single analysis
pub struct ComplexityAnalyzer {
  code: String,
  lines: Vec<String>,
  normalized: String,
  lowered: String,
  language: SourceLanguage,
}

impl ComplexityAnalyzer {
  pub fn new(code: &str, language: SourceLanguage) -> Self {
    let code = code.trim().to_string();
    let lines = code.lines().map(|line| line.trim().to_string()).collect();
    let normalized = normalize(&code);
    let lowered = code.to_lowercase();

    Self { code, lines, normalized, lowered, language }
  }

  pub fn language(&self) -> SourceLanguage {
    self.language
  }

  pub fn algorithm_pattern(&self) -> BreakdownItem {
    detect_algorithm(&self.normalized)
  }

  pub fn loop_nesting(&self) -> BreakdownItem {
    analyze_loops(&self.lines)
  }

  pub fn recursion(&self) -> BreakdownItem {
    RecursionFindings::scan(&self.code, &self.lines).classify(&self.lowered)
  }

  pub fn builtin_operations(&self) -> Vec<BreakdownItem> {
    detect_builtins(&self.code)
  }

  pub fn space_complexity(&self, recursion: ComplexityClass) -> ComplexityClass {
    estimate_space(&self.code, recursion)
  }

  pub fn analyze(&self) -> ComplexityResult {
    let mut breakdown = Vec::new();
    let mut time = ComplexityClass::Constant;

    let mut record = |item: BreakdownItem, breakdown: &mut Vec<BreakdownItem>| {
      time = worse_of(time, item.complexity);
      breakdown.push(item);
    };

    let algorithm = self.algorithm_pattern();
    let algorithm_found = !algorithm.complexity.is_constant();
    if algorithm_found {
      record(algorithm, &mut breakdown);
    }

    // a recognised algorithm already accounts for its own loop
    let loops = self.loop_nesting();
    if !loops.complexity.is_constant() && !algorithm_found {
      record(loops, &mut breakdown);
    }

    let recursion = self.recursion();
    let recursion_class = recursion.complexity;
    if !recursion.complexity.is_constant() {
      record(recursion, &mut breakdown);
    }

    for builtin in self.builtin_operations() {
      if !builtin.complexity.is_constant() {
        record(builtin, &mut breakdown);
      }
    }

    let space = self.space_complexity(recursion_class);

    tracing::debug!(
      language = %self.language,
      time = %time,
      space = %space,
      findings = breakdown.len(),
      "analysis complete"
    );

    ComplexityResult {
      time_complexity: time,
      space_complexity: space,
      explanation: explain(time).to_string(),
      breakdown,
    }
  }
}

/// Classify the time and space complexity of a code snippet.
///
/// Never fails: text without any recognisable structure is `O(1)` with an
/// empty breakdown. The language only labels the snippet; every heuristic
/// applies to all languages alike.
pub fn analyze(code: &str, language: SourceLanguage) -> ComplexityResult {
  ComplexityAnalyzer::new(code, language).analyze()
}
