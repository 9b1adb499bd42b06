//! Memory growth estimation
//!
//! Allocation cues and the recursion verdict are merged through the lattice.
//! A two-dimensional construction cue then replaces the merged value outright
//! with `O(n²)` rather than merging with it.

use crate::lattice::{worse_of, ComplexityClass};

const ALLOCATION_CUES: &[&str] = &["new ", "[]", "list(", "vector"];

fn has_allocation_cue(code: &str) -> bool {
  ALLOCATION_CUES.iter().any(|cue| code.contains(cue))
}

fn has_two_dimensional_cue(code: &str) -> bool {
  code.contains("[][]") || (code.contains("new ") && code.contains('[') && code.contains("]["))
}

/// Estimate space complexity from `code` and the recursion analyzer's verdict
pub fn estimate_space(code: &str, recursion: ComplexityClass) -> ComplexityClass {
  let mut space = ComplexityClass::Constant;

  if has_allocation_cue(code) {
    space = ComplexityClass::Linear;
  }

  // call stack depth follows recursion depth
  match recursion {
    ComplexityClass::Constant => {}
    ComplexityClass::Logarithmic => space = worse_of(space, ComplexityClass::Logarithmic),
    _ => space = worse_of(space, ComplexityClass::Linear),
  }

  if has_two_dimensional_cue(code) {
    space = ComplexityClass::Quadratic;
  }

  space
}

#[cfg(test)]
mod tests {
  use super::*;
  use ComplexityClass::*;

  #[test]
  fn test_constant_space() {
    assert_eq!(estimate_space("int x = a + b;", Constant), Constant);
  }

  #[test]
  fn test_allocation_cues() {
    assert_eq!(estimate_space("int[] copy = new int[n];", Constant), Linear);
    assert_eq!(estimate_space("result = []", Constant), Linear);
    assert_eq!(estimate_space("out = list(xs)", Constant), Linear);
    assert_eq!(estimate_space("std::vector<int> v;", Constant), Linear);
  }

  #[test]
  fn test_recursion_call_stack() {
    assert_eq!(estimate_space("x", Logarithmic), Logarithmic);
    assert_eq!(estimate_space("x", Linear), Linear);
    assert_eq!(estimate_space("x", Exponential), Linear);
    // allocation already dominates a logarithmic stack
    assert_eq!(estimate_space("xs = []", Logarithmic), Linear);
  }

  #[test]
  fn test_two_dimensional_overrides() {
    assert_eq!(estimate_space("int[][] grid;", Constant), Quadratic);
    assert_eq!(estimate_space("int[][] grid = new int[n][n];", Linear), Quadratic);
    assert_eq!(estimate_space("grid = new int[n][m]", Constant), Quadratic);
  }

  #[test]
  fn test_bracket_pair_without_new_is_not_two_dimensional() {
    assert_eq!(estimate_space("x = a[i][j]", Constant), Constant);
  }
}
