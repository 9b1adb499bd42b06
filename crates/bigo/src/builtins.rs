//! Standard library operations with a known cost

use crate::analyzer::BreakdownItem;
use crate::lattice::ComplexityClass;

/// A library call recognised by name
#[derive(Debug, Clone, Copy)]
pub struct BuiltinOperation {
  pub name: &'static str,
  pub complexity: ComplexityClass,
  pub description: &'static str,
}

pub const BUILTINS: &[BuiltinOperation] = &[
  BuiltinOperation { name: "sort", complexity: ComplexityClass::Linearithmic, description: "Sorting operation" },
  BuiltinOperation { name: "sorted", complexity: ComplexityClass::Linearithmic, description: "Sorting operation" },
  BuiltinOperation { name: "Arrays.sort", complexity: ComplexityClass::Linearithmic, description: "Array sorting" },
  BuiltinOperation {
    name: "Collections.sort",
    complexity: ComplexityClass::Linearithmic,
    description: "Collection sorting",
  },
  BuiltinOperation { name: "qsort", complexity: ComplexityClass::Linearithmic, description: "Quick sort operation" },
  BuiltinOperation { name: "find", complexity: ComplexityClass::Linear, description: "Linear search operation" },
  BuiltinOperation { name: "indexOf", complexity: ComplexityClass::Linear, description: "Linear search in array" },
  BuiltinOperation { name: "reverse", complexity: ComplexityClass::Linear, description: "Array reversal operation" },
  BuiltinOperation { name: "max", complexity: ComplexityClass::Linear, description: "Finding maximum element" },
  BuiltinOperation { name: "min", complexity: ComplexityClass::Linear, description: "Finding minimum element" },
];

/// Every catalog entry whose name occurs in `code`, in catalog order.
/// Matching is a case-sensitive substring check, so `Arrays.sort` also fires `sort`.
pub fn detect_builtins(code: &str) -> Vec<BreakdownItem> {
  BUILTINS
    .iter()
    .filter(|builtin| code.contains(builtin.name))
    .map(|builtin| {
      tracing::trace!(name = builtin.name, "builtin operation found");
      BreakdownItem::new(format!("Built-in Function: {}", builtin.name), builtin.complexity, builtin.description)
    })
    .collect()
}
