//! Supported source languages
//!
//! The language never changes how a snippet is analyzed. It decides which
//! files a directory walk picks up, how results are labelled, and which
//! sample snippet `--sample` prints.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::BigoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
  #[default]
  Java,
  Python,
  C,
  Cpp,
}

pub const ALL_LANGUAGES: [SourceLanguage; 4] =
  [SourceLanguage::Java, SourceLanguage::Python, SourceLanguage::C, SourceLanguage::Cpp];

impl SourceLanguage {
  pub fn id(&self) -> &'static str {
    match self {
      SourceLanguage::Java => "java",
      SourceLanguage::Python => "python",
      SourceLanguage::C => "c",
      SourceLanguage::Cpp => "cpp",
    }
  }

  pub fn display_name(&self) -> &'static str {
    match self {
      SourceLanguage::Java => "Java",
      SourceLanguage::Python => "Python",
      SourceLanguage::C => "C",
      SourceLanguage::Cpp => "C++",
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      SourceLanguage::Java => "Object-oriented programming",
      SourceLanguage::Python => "High-level programming",
      SourceLanguage::C => "System programming",
      SourceLanguage::Cpp => "Systems & applications",
    }
  }

  /// Canonical file extension, without the dot
  pub fn extension(&self) -> &'static str {
    match self {
      SourceLanguage::Java => "java",
      SourceLanguage::Python => "py",
      SourceLanguage::C => "c",
      SourceLanguage::Cpp => "cpp",
    }
  }

  pub fn from_extension(extension: &str) -> Option<Self> {
    match extension.to_ascii_lowercase().as_str() {
      "java" => Some(SourceLanguage::Java),
      "py" => Some(SourceLanguage::Python),
      "c" | "h" => Some(SourceLanguage::C),
      "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(SourceLanguage::Cpp),
      _ => None,
    }
  }

  pub fn from_path(path: &Path) -> Option<Self> {
    path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
  }

  /// A representative snippet for the language
  pub fn sample(&self) -> &'static str {
    match self {
      SourceLanguage::Java => JAVA_SAMPLE,
      SourceLanguage::Python => PYTHON_SAMPLE,
      SourceLanguage::C => C_SAMPLE,
      SourceLanguage::Cpp => CPP_SAMPLE,
    }
  }
}

impl fmt::Display for SourceLanguage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for SourceLanguage {
  type Err = BigoError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_ascii_lowercase();
    match wanted.as_str() {
      "c++" => return Ok(SourceLanguage::Cpp),
      "py" => return Ok(SourceLanguage::Python),
      _ => {}
    }
    ALL_LANGUAGES
      .into_iter()
      .find(|language| language.id() == wanted)
      .ok_or_else(|| BigoError::UnknownLanguage(s.to_string()))
  }
}

const JAVA_SAMPLE: &str = "public class Example {
    public static void bubbleSort(int[] arr) {
        int n = arr.length;
        for (int i = 0; i < n-1; i++) {
            for (int j = 0; j < n-i-1; j++) {
                if (arr[j] > arr[j+1]) {
                    int temp = arr[j];
                    arr[j] = arr[j+1];
                    arr[j+1] = temp;
                }
            }
        }
    }
}";

const PYTHON_SAMPLE: &str = "def binary_search(arr, target):
    left, right = 0, len(arr) - 1

    while left <= right:
        mid = (left + right) // 2
        if arr[mid] == target:
            return mid
        elif arr[mid] < target:
            left = mid + 1
        else:
            right = mid - 1

    return -1";

const C_SAMPLE: &str = "#include <stdio.h>

void quickSort(int arr[], int low, int high) {
    if (low < high) {
        int pi = partition(arr, low, high);
        quickSort(arr, low, pi - 1);
        quickSort(arr, pi + 1, high);
    }
}";

const CPP_SAMPLE: &str = "#include <vector>
#include <algorithm>

class Solution {
public:
    int fibonacci(int n) {
        if (n <= 1) return n;
        return fibonacci(n-1) + fibonacci(n-2);
    }
};";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_extensions_round_trip() {
    for language in ALL_LANGUAGES {
      assert_eq!(SourceLanguage::from_extension(language.extension()), Some(language));
    }
  }

  #[test]
  fn test_extension_aliases() {
    assert_eq!(SourceLanguage::from_extension("H"), Some(SourceLanguage::C));
    assert_eq!(SourceLanguage::from_extension("hpp"), Some(SourceLanguage::Cpp));
    assert_eq!(SourceLanguage::from_extension("rs"), None);
    assert_eq!(SourceLanguage::from_path(Path::new("src/Main.java")), Some(SourceLanguage::Java));
    assert_eq!(SourceLanguage::from_path(Path::new("Makefile")), None);
  }

  #[test]
  fn test_parse_names() {
    assert_eq!("Python".parse::<SourceLanguage>().unwrap(), SourceLanguage::Python);
    assert_eq!("c++".parse::<SourceLanguage>().unwrap(), SourceLanguage::Cpp);
    assert_eq!("cpp".parse::<SourceLanguage>().unwrap(), SourceLanguage::Cpp);
    assert!("rust".parse::<SourceLanguage>().is_err());
  }

  #[test]
  fn test_default_is_java() {
    assert_eq!(SourceLanguage::default(), SourceLanguage::Java);
  }

  #[test]
  fn test_display_names() {
    assert_eq!(SourceLanguage::Cpp.display_name(), "C++");
    assert_eq!(SourceLanguage::Cpp.to_string(), "cpp");
    assert!(!SourceLanguage::C.description().is_empty());
  }

  #[test]
  fn test_samples_are_distinct() {
    assert!(SourceLanguage::Python.sample().starts_with("def binary_search"));
    assert!(SourceLanguage::Cpp.sample().contains("fibonacci(n-1) + fibonacci(n-2)"));
    assert_ne!(SourceLanguage::Java.sample(), SourceLanguage::C.sample());
  }
}
