//! Human-readable sentence for each complexity class

use crate::lattice::ComplexityClass;

const EXPLANATIONS: &[(ComplexityClass, &str)] = &[
  (ComplexityClass::Constant, "Constant time - execution time does not depend on input size"),
  (
    ComplexityClass::Logarithmic,
    "Logarithmic time - very efficient, execution time grows slowly with input size",
  ),
  (ComplexityClass::Linear, "Linear time - execution time grows proportionally with input size"),
  (ComplexityClass::Linearithmic, "Linearithmic time - common in efficient sorting algorithms"),
  (ComplexityClass::Quadratic, "Quadratic time - execution time grows quadratically with input size"),
  (ComplexityClass::Cubic, "Cubic time - execution time grows cubically with input size"),
  (ComplexityClass::Exponential, "Exponential time - execution time doubles with each additional input"),
];

const FALLBACK: &str = "Complex algorithmic behavior detected";

pub fn explain(complexity: ComplexityClass) -> &'static str {
  EXPLANATIONS
    .iter()
    .find(|(class, _)| *class == complexity)
    .map(|(_, sentence)| *sentence)
    .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::lattice::KNOWN_CLASSES;

  #[test]
  fn test_every_known_class_has_its_own_sentence() {
    let sentences: Vec<&str> = KNOWN_CLASSES.iter().map(|class| explain(*class)).collect();
    assert!(sentences.iter().all(|s| *s != FALLBACK));

    let mut unique = sentences.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), KNOWN_CLASSES.len());
  }

  #[test]
  fn test_specific_sentences() {
    assert!(explain(ComplexityClass::Linearithmic).contains("sorting"));
    assert!(explain(ComplexityClass::Exponential).starts_with("Exponential time"));
  }

  #[test]
  fn test_fallback() {
    assert_eq!(explain(ComplexityClass::Polynomial(4)), "Complex algorithmic behavior detected");
  }
}
