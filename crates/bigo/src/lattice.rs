//! Complexity classes and their ordering
//!
//! Every detector reports one of a fixed, totally ordered set of classes.
//! Verdicts are combined with [`worse_of`], which keeps whichever class grows
//! faster. The symbolic `O(n^d)` produced for very deep loop nests sits outside
//! the ordered set and always loses a comparison.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::BigoError;

/// Asymptotic growth class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
  Constant,
  Logarithmic,
  Linear,
  Linearithmic,
  Quadratic,
  Cubic,
  Exponential,
  /// `O(n^d)` for nesting depths beyond three
  Polynomial(u32),
}

/// The ranked classes, cheapest first
pub const KNOWN_CLASSES: [ComplexityClass; 7] = [
  ComplexityClass::Constant,
  ComplexityClass::Logarithmic,
  ComplexityClass::Linear,
  ComplexityClass::Linearithmic,
  ComplexityClass::Quadratic,
  ComplexityClass::Cubic,
  ComplexityClass::Exponential,
];

impl ComplexityClass {
  /// Position in the fixed order, `None` for classes outside it
  pub fn rank(&self) -> Option<usize> {
    KNOWN_CLASSES.iter().position(|known| known == self)
  }

  pub fn is_known(&self) -> bool {
    self.rank().is_some()
  }

  pub fn is_constant(&self) -> bool {
    *self == ComplexityClass::Constant
  }

  /// True when `self` ranks strictly above `ceiling`
  pub fn exceeds(&self, ceiling: ComplexityClass) -> bool {
    self.rank() > ceiling.rank()
  }
}

/// Return whichever class ranks higher. Ties and unknown candidates keep `current`.
pub fn worse_of(current: ComplexityClass, candidate: ComplexityClass) -> ComplexityClass {
  if candidate.rank() > current.rank() {
    candidate
  } else {
    current
  }
}

/// Fold a sequence of classes into the worst one, starting from `O(1)`
pub fn worst<I>(classes: I) -> ComplexityClass
where
  I: IntoIterator<Item = ComplexityClass>,
{
  classes.into_iter().fold(ComplexityClass::Constant, worse_of)
}

impl fmt::Display for ComplexityClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ComplexityClass::Constant => f.write_str("O(1)"),
      ComplexityClass::Logarithmic => f.write_str("O(log n)"),
      ComplexityClass::Linear => f.write_str("O(n)"),
      ComplexityClass::Linearithmic => f.write_str("O(n log n)"),
      ComplexityClass::Quadratic => f.write_str("O(n²)"),
      ComplexityClass::Cubic => f.write_str("O(n³)"),
      ComplexityClass::Exponential => f.write_str("O(2^n)"),
      ComplexityClass::Polynomial(degree) => write!(f, "O(n^{degree})"),
    }
  }
}

impl FromStr for ComplexityClass {
  type Err = BigoError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let compact: String = s.chars().filter(|ch| !ch.is_whitespace()).collect::<String>().to_lowercase();

    let class = match compact.as_str() {
      "o(1)" => ComplexityClass::Constant,
      "o(logn)" => ComplexityClass::Logarithmic,
      "o(n)" => ComplexityClass::Linear,
      "o(nlogn)" => ComplexityClass::Linearithmic,
      "o(n²)" | "o(n^2)" => ComplexityClass::Quadratic,
      "o(n³)" | "o(n^3)" => ComplexityClass::Cubic,
      "o(2^n)" => ComplexityClass::Exponential,
      other => {
        let degree = other
          .strip_prefix("o(n^")
          .and_then(|rest| rest.strip_suffix(')'))
          .and_then(|digits| digits.parse::<u32>().ok())
          .filter(|degree| *degree > 3);

        match degree {
          Some(degree) => ComplexityClass::Polynomial(degree),
          None => return Err(BigoError::UnknownComplexity(s.to_string())),
        }
      }
    };

    Ok(class)
  }
}

impl Serialize for ComplexityClass {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for ComplexityClass {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let label = String::deserialize(deserializer)?;
    label.parse().map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ComplexityClass::*;

  #[test]
  fn test_worse_of_picks_higher_rank() {
    assert_eq!(worse_of(Linear, Quadratic), Quadratic);
    assert_eq!(worse_of(Exponential, Cubic), Exponential);
    assert_eq!(worse_of(Logarithmic, Logarithmic), Logarithmic);
  }

  #[test]
  fn test_constant_is_identity() {
    for class in KNOWN_CLASSES {
      assert_eq!(worse_of(class, Constant), class);
      assert_eq!(worse_of(Constant, class), class);
    }
  }

  #[test]
  fn test_commutative_and_associative() {
    for a in KNOWN_CLASSES {
      for b in KNOWN_CLASSES {
        assert_eq!(worse_of(a, b), worse_of(b, a));
        for c in KNOWN_CLASSES {
          assert_eq!(worse_of(worse_of(a, b), c), worse_of(a, worse_of(b, c)));
        }
      }
    }
  }

  #[test]
  fn test_unknown_always_loses() {
    assert_eq!(worse_of(Constant, Polynomial(4)), Constant);
    assert_eq!(worse_of(Polynomial(5), Constant), Constant);
    assert_eq!(worst([Polynomial(6), Linear]), Linear);
    assert_eq!(worst([Polynomial(6)]), Constant);
  }

  #[test]
  fn test_worst_of_sequence() {
    assert_eq!(worst(Vec::new()), Constant);
    assert_eq!(worst([Linear, Linearithmic, Logarithmic]), Linearithmic);
  }

  #[test]
  fn test_labels() {
    assert_eq!(Quadratic.to_string(), "O(n²)");
    assert_eq!(Linearithmic.to_string(), "O(n log n)");
    assert_eq!(Polynomial(5).to_string(), "O(n^5)");
  }

  #[test]
  fn test_parse_labels() {
    for class in KNOWN_CLASSES {
      assert_eq!(class.to_string().parse::<ComplexityClass>().unwrap(), class);
    }
    assert_eq!("O(n^2)".parse::<ComplexityClass>().unwrap(), Quadratic);
    assert_eq!("o(N LOG N)".parse::<ComplexityClass>().unwrap(), Linearithmic);
    assert_eq!("O(n^7)".parse::<ComplexityClass>().unwrap(), Polynomial(7));
    assert!("O(n!)".parse::<ComplexityClass>().is_err());
    assert!("O(n^1)".parse::<ComplexityClass>().is_err());
  }

  #[test]
  fn test_exceeds() {
    assert!(Quadratic.exceeds(Linear));
    assert!(!Linear.exceeds(Linear));
    assert!(!Polynomial(4).exceeds(Constant));
  }

  #[test]
  fn test_serde_uses_labels() {
    let json = serde_json::to_string(&Cubic).unwrap();
    assert_eq!(json, "\"O(n³)\"");
    let back: ComplexityClass = serde_json::from_str("\"O(2^n)\"").unwrap();
    assert_eq!(back, Exponential);
  }
}
