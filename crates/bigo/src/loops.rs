//! Loop nesting analysis
//!
//! Walks the trimmed source lines once, keeping a stack of open loops. A line
//! that opens a loop pushes a marker; a line containing `}` closes the most
//! recent one. Only a single counter is modelled: brace balance, early exits
//! and loops that do not span the whole input are not considered.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::analyzer::BreakdownItem;
use crate::lattice::ComplexityClass;

/// C-style three clause `for`, parenthesised `while`, and `for x in range(`
static LOOP_OPENINGS: Lazy<RegexSet> = Lazy::new(|| {
  RegexSet::new([r"for\s*\(.*;.*<.*;.*\)", r"while\s*\(.*\)", r"for\s+\w+\s+in\s+range\("])
    .expect("loop opening patterns are valid")
});

const HALVING_CUES: &[&str] = &["/= 2", ">>= 1", "i = i/2", "n = n/2"];

/// Summary of the loop structure found in a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopNesting {
  pub max_depth: usize,
  pub halving: bool,
}

pub fn is_loop_opening(line: &str) -> bool {
  LOOP_OPENINGS.is_match(line)
}

/// Division by two, right shift by one, or a midpoint over two bounds
pub fn has_halving_cue(line: &str) -> bool {
  HALVING_CUES.iter().any(|cue| line.contains(cue)) || (line.contains("left + right") && line.contains("/2"))
}

/// Track loop nesting over trimmed lines
pub fn scan_loops<S: AsRef<str>>(lines: &[S]) -> LoopNesting {
  let mut open_loops: Vec<usize> = Vec::new();
  let mut nesting = LoopNesting::default();

  for (index, line) in lines.iter().enumerate() {
    let line = line.as_ref();

    if is_loop_opening(line) {
      open_loops.push(index);
      nesting.max_depth = nesting.max_depth.max(open_loops.len());

      if has_halving_cue(line) {
        nesting.halving = true;
      }
    }

    if line.contains('}') && !open_loops.is_empty() {
      open_loops.pop();
    }
  }

  nesting
}

impl LoopNesting {
  pub fn complexity(&self) -> ComplexityClass {
    match (self.max_depth, self.halving) {
      (0, _) => ComplexityClass::Constant,
      (1, true) => ComplexityClass::Logarithmic,
      (1, false) => ComplexityClass::Linear,
      (2, _) => ComplexityClass::Quadratic,
      (3, _) => ComplexityClass::Cubic,
      (depth, _) => ComplexityClass::Polynomial(depth as u32),
    }
  }

  pub fn to_breakdown(&self) -> BreakdownItem {
    if self.max_depth == 0 {
      return BreakdownItem::new(
        "Sequential Operations",
        ComplexityClass::Constant,
        "No loops detected - constant time operations",
      );
    }

    if self.max_depth == 1 && self.halving {
      return BreakdownItem::new(
        "Logarithmic Loop",
        ComplexityClass::Logarithmic,
        "Loop with halving pattern - logarithmic time complexity",
      );
    }

    let plural = if self.max_depth > 1 { "s" } else { "" };
    BreakdownItem::new(
      format!("Nested Loops ({} level{plural})", self.max_depth),
      self.complexity(),
      format!("{} level{plural} of loop nesting detected", self.max_depth),
    )
  }
}

/// Classify a snippet by its deepest loop nest
pub fn analyze_loops<S: AsRef<str>>(lines: &[S]) -> BreakdownItem {
  let nesting = scan_loops(lines);
  tracing::debug!(max_depth = nesting.max_depth, halving = nesting.halving, "loop nesting scanned");
  nesting.to_breakdown()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(code: &str) -> Vec<&str> {
    code.lines().map(str::trim).collect()
  }

  #[test]
  fn test_loop_openings() {
    assert!(is_loop_opening("for (int i = 0; i < n; i++) {"));
    assert!(is_loop_opening("for(i=0;i<n;i++)"));
    assert!(is_loop_opening("while (x > 0) {"));
    assert!(is_loop_opening("for i in range(n):"));
    assert!(!is_loop_opening("while x > 0:"));
    assert!(!is_loop_opening("for item in items:"));
    assert!(!is_loop_opening("for (i = n; i > 0; i--)"));
  }

  #[test]
  fn test_halving_cues() {
    assert!(has_halving_cue("while (n > 1) { n /= 2; }"));
    assert!(has_halving_cue("for (; i < n; i >>= 1)"));
    assert!(has_halving_cue("while (lo < hi) { mid = (left + right)/2; }"));
    assert!(!has_halving_cue("while (n > 1) { n -= 2; }"));
  }

  #[test]
  fn test_no_loops() {
    let item = analyze_loops(&lines("int x = 1;\nreturn x;"));
    assert_eq!(item.operation, "Sequential Operations");
    assert_eq!(item.complexity, ComplexityClass::Constant);
  }

  #[test]
  fn test_single_loop() {
    let code = "for (int i = 0; i < n; i++) {\n  sum += i;\n}";
    let item = analyze_loops(&lines(code));
    assert_eq!(item.complexity, ComplexityClass::Linear);
    assert_eq!(item.operation, "Nested Loops (1 level)");
    assert_eq!(item.description, "1 level of loop nesting detected");
  }

  #[test]
  fn test_nested_depths() {
    let two = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    x++;\n  }\n}";
    assert_eq!(scan_loops(&lines(two)).max_depth, 2);
    assert_eq!(analyze_loops(&lines(two)).complexity, ComplexityClass::Quadratic);

    let three = "for (int i = 0; i < n; i++) {\n  for (int j = 0; j < n; j++) {\n    for (int k = 0; k < n; k++) {\n      x++;\n    }\n  }\n}";
    assert_eq!(analyze_loops(&lines(three)).complexity, ComplexityClass::Cubic);
  }

  #[test]
  fn test_sequential_loops_do_not_nest() {
    let code = "for (int i = 0; i < n; i++) {\n  a++;\n}\nfor (int j = 0; j < n; j++) {\n  b++;\n}";
    assert_eq!(scan_loops(&lines(code)).max_depth, 1);
  }

  #[test]
  fn test_deep_nesting_is_symbolic() {
    let code = "for i in range(n):\n for j in range(n):\n  for k in range(n):\n   for l in range(n):\n    pass";
    let item = analyze_loops(&lines(code));
    assert_eq!(item.complexity, ComplexityClass::Polynomial(4));
    assert_eq!(item.complexity.to_string(), "O(n^4)");
    assert_eq!(item.operation, "Nested Loops (4 levels)");
  }

  #[test]
  fn test_halving_loop_is_logarithmic() {
    let item = analyze_loops(&lines("while (n > 1) { n /= 2; }"));
    assert_eq!(item.operation, "Logarithmic Loop");
    assert_eq!(item.complexity, ComplexityClass::Logarithmic);
  }

  #[test]
  fn test_halving_ignored_when_nested() {
    let code = "for (int i = 0; i < n; i++) {\n  while (m > 1) { m /= 2; }\n}";
    let nesting = scan_loops(&lines(code));
    assert!(nesting.halving);
    assert_eq!(nesting.complexity(), ComplexityClass::Quadratic);
  }

  #[test]
  fn test_stray_closing_braces_are_harmless() {
    let code = "}\n}\nfor (int i = 0; i < n; i++) {\n}";
    assert_eq!(scan_loops(&lines(code)).max_depth, 1);
  }
}
