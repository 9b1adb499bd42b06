//! Named algorithm recognition
//!
//! Matches the whitespace-collapsed, lower-cased source against a fixed,
//! ordered catalog of algorithm signatures. The first signature with any
//! matching pattern wins; later entries are never consulted, so overlapping
//! vocabulary (an incidental "merge" inside a quicksort) is not double counted.

use once_cell::sync::Lazy;
use regex::RegexSet;

use crate::analyzer::BreakdownItem;
use crate::lattice::ComplexityClass;

/// A named algorithm and the textual shapes that identify it
struct AlgorithmSignature {
  operation: &'static str,
  complexity: ComplexityClass,
  description: &'static str,
  patterns: &'static [&'static str],
}

const SIGNATURES: &[AlgorithmSignature] = &[
  AlgorithmSignature {
    operation: "Binary Search Algorithm",
    complexity: ComplexityClass::Logarithmic,
    description: "Divide and conquer search - eliminates half the search space each iteration",
    patterns: &[
      r"while.*left.*<=.*right.*mid.*=.*(left.*\+.*right).*/.*2",
      r"while.*low.*<=.*high.*mid.*=.*(low.*\+.*high).*/.*2",
      r"while.*start.*<=.*end.*mid.*=.*(start.*\+.*end).*/.*2",
      r"arr\[mid\].*==.*target|arr\[mid\].*<.*target|arr\[mid\].*>.*target",
      r"binary.*search|binarysearch",
      r"(left|low|start).*=.*mid.*\+.*1.*(right|high|end).*=.*mid.*-.*1",
    ],
  },
  AlgorithmSignature {
    operation: "Quick Sort Algorithm",
    complexity: ComplexityClass::Linearithmic,
    description: "Divide and conquer sorting algorithm",
    patterns: &[
      r"quicksort|quick.*sort",
      r"partition.*function|partition.*method",
      r"pivot.*element|pivot.*selection",
    ],
  },
  AlgorithmSignature {
    operation: "Merge Sort Algorithm",
    complexity: ComplexityClass::Linearithmic,
    description: "Stable divide and conquer sorting algorithm",
    patterns: &[
      r"mergesort|merge.*sort",
      r"merge.*function.*merge.*function",
      r"divide.*array.*merge.*sorted",
    ],
  },
  AlgorithmSignature {
    operation: "Fibonacci with Memoization",
    complexity: ComplexityClass::Linear,
    description: "Dynamic programming approach to Fibonacci sequence",
    patterns: &[
      r"fibonacci.*memo|memo.*fibonacci",
      r"dp\[.*\].*fibonacci|fibonacci.*dp\[.*\]",
    ],
  },
];

static COMPILED: Lazy<Vec<RegexSet>> = Lazy::new(|| {
  SIGNATURES
    .iter()
    .map(|signature| RegexSet::new(signature.patterns).expect("algorithm signature patterns are valid"))
    .collect()
});

/// Lower-case the source and collapse every whitespace run into a single space
pub fn normalize(code: &str) -> String {
  code.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Identify the first matching algorithm signature in normalized source
pub fn detect_algorithm(normalized: &str) -> BreakdownItem {
  let hit = SIGNATURES.iter().zip(COMPILED.iter()).find(|(_, set)| set.is_match(normalized));

  match hit {
    Some((signature, _)) => {
      tracing::debug!(operation = signature.operation, "algorithm signature matched");
      BreakdownItem::new(signature.operation, signature.complexity, signature.description)
    }
    None => BreakdownItem::new(
      "No Specific Algorithm Detected",
      ComplexityClass::Constant,
      "No recognized algorithmic patterns found",
    ),
  }
}
