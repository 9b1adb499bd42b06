//! Recursion detection for the first declared function
//!
//! Finds the first function-like declaration in the snippet (led by a keyword
//! such as `def` or `int`, or by a run of type tokens at the start of a line)
//! and looks for the same identifier followed by `(` elsewhere. The shape of
//! those self-calls (several on one line, or next to halving arithmetic)
//! decides whether the recursion is exponential, logarithmic or linear.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analyzer::BreakdownItem;
use crate::lattice::ComplexityClass;

/// A declaration keyword, optional type tokens on the same line, then `name (`
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"\b(?:def|function|fn|func|public|private|protected|static|void|int|long|float|double|char|bool|boolean|auto)[ \t*&]+(?:[\w<>\[\],*&]+[ \t]+)*?(\w+)[ \t]*\(",
  )
  .expect("declaration pattern is valid")
});

/// A line-leading run of type tokens, then `name (`
static TYPED_DECLARATION: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?m)^[ \t]*((?:[\w<>\[\],*&:]+[ \t*&]+)+)(\w+)[ \t]*\(")
    .expect("typed declaration pattern is valid")
});

/// Words that start statements or expressions, never a return type
const STATEMENT_WORDS: &[&str] = &[
  "if", "else", "elif", "for", "while", "do", "switch", "case", "return", "catch", "throw", "new", "delete",
  "goto", "yield", "await", "assert", "raise", "print", "not", "and", "or", "in", "is", "with", "lambda", "del",
  "sizeof", "typeof",
];

/// The first function declaration in a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
  pub name: String,
  /// Zero-based line of the declaration
  pub line: usize,
  /// Whether the declaration text itself contains `name(`
  pub contains_call_shape: bool,
}

/// What the scan learned about self-calls
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecursionFindings {
  pub declaration: Option<Declaration>,
  pub recursive_calls: usize,
  pub multiple_calls: bool,
  pub divide_and_conquer: bool,
}

pub fn find_declaration(code: &str) -> Option<Declaration> {
  let keyword_led = DECLARATION.captures(code).and_then(|captures| {
    let whole = captures.get(0)?;
    Some((whole.start(), whole.as_str(), captures.get(1)?.as_str()))
  });

  let typed = TYPED_DECLARATION.captures_iter(code).find_map(|captures| {
    let whole = captures.get(0)?;
    let prefix = captures.get(1)?.as_str();
    let name = captures.get(2)?.as_str();
    let line_end = code[whole.end()..].find('\n').map_or(code.len(), |offset| whole.end() + offset);

    let is_statement = STATEMENT_WORDS.contains(&name)
      || prefix.split(|c: char| c.is_whitespace() || c == '*' || c == '&').any(|word| STATEMENT_WORDS.contains(&word));
    let is_prototype_or_call = code[whole.start()..line_end].trim_end().ends_with(';');

    (!is_statement && !is_prototype_or_call).then(|| (whole.start(), whole.as_str(), name))
  });

  let (start, text, name) = match (keyword_led, typed) {
    (Some(keyword_led), Some(typed)) => {
      if typed.0 < keyword_led.0 {
        typed
      } else {
        keyword_led
      }
    }
    (found, None) | (None, found) => found?,
  };

  Some(Declaration {
    line: code[..start].matches('\n').count(),
    contains_call_shape: text.ends_with(&format!("{name}(")),
    name: name.to_string(),
  })
}

fn has_divide_and_conquer_cue(line: &str) -> bool {
  line.contains("/2") || line.contains("mid") || (line.contains("left") && line.contains("right"))
}

impl RecursionFindings {
  /// Scan trimmed `lines` of `code` for calls to the first declared function
  pub fn scan<S: AsRef<str>>(code: &str, lines: &[S]) -> Self {
    let Some(declaration) = find_declaration(code) else {
      return Self::default();
    };

    let call = format!("{}(", declaration.name);
    let mut findings = Self::default();

    for (index, line) in lines.iter().enumerate() {
      let line = line.as_ref();
      let mut calls = line.matches(call.as_str()).count();
      if index == declaration.line && declaration.contains_call_shape {
        calls = calls.saturating_sub(1);
      }

      if calls == 0 {
        continue;
      }

      findings.recursive_calls += calls;
      if calls > 1 {
        findings.multiple_calls = true;
      }
      if has_divide_and_conquer_cue(line) {
        findings.divide_and_conquer = true;
      }
    }

    findings.declaration = Some(declaration);
    findings
  }

  pub fn is_recursive(&self) -> bool {
    self.recursive_calls > 0
  }

  /// Classify the recursion; `lowered` is the lower-cased source
  pub fn classify(&self, lowered: &str) -> BreakdownItem {
    if !self.is_recursive() {
      return BreakdownItem::new("No Recursion", ComplexityClass::Constant, "No recursive calls detected");
    }

    if lowered.contains("fibonacci") && self.multiple_calls {
      return BreakdownItem::new(
        "Exponential Recursion (Fibonacci)",
        ComplexityClass::Exponential,
        "Multiple recursive calls without memoization - exponential growth",
      );
    }

    let named_divide_and_conquer = ["binary", "merge", "quick"].iter().any(|word| lowered.contains(word));
    if self.divide_and_conquer || named_divide_and_conquer {
      return BreakdownItem::new(
        "Divide & Conquer Recursion",
        ComplexityClass::Logarithmic,
        "Logarithmic recursion - dividing problem space in half",
      );
    }

    BreakdownItem::new("Linear Recursion", ComplexityClass::Linear, "Single recursive call - linear depth")
  }
}

/// Detect and classify recursion in a snippet
pub fn analyze_recursion<S: AsRef<str>>(code: &str, lines: &[S]) -> BreakdownItem {
  let findings = RecursionFindings::scan(code, lines);
  tracing::debug!(
    function = findings.declaration.as_ref().map(|d| d.name.as_str()),
    calls = findings.recursive_calls,
    multiple = findings.multiple_calls,
    divide_and_conquer = findings.divide_and_conquer,
    "recursion scanned"
  );
  findings.classify(&code.to_lowercase())
}
