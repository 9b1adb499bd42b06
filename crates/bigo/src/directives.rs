//! "bigo ignore" directive processing
//!
//! Source files may exclude regions from analysis with comments in any
//! comment style:
//!
//! - `bigo ignore file` skips the whole file
//! - `bigo ignore start` / `bigo ignore end` bracket an excluded region (nestable)
//! - `bigo ignore line` excludes the line that follows
//!
//! Directive lines are always dropped from the analyzed text.

use once_cell::sync::Lazy;
use regex::Regex;

static IGNORE_DIRECTIVE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"bigo\s+ignore\s+(file|start|end|line)").expect("directive pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
  File,
  Start,
  End,
  Line,
}

/// Find the directive on a line, if any
pub fn parse_directive(line: &str) -> Option<Directive> {
  let captures = IGNORE_DIRECTIVE.captures(line)?;
  match captures.get(1)?.as_str() {
    "file" => Some(Directive::File),
    "start" => Some(Directive::Start),
    "end" => Some(Directive::End),
    "line" => Some(Directive::Line),
    _ => None,
  }
}

/// Check if lines contain a "bigo ignore file" directive
pub fn is_ignored_file(lines: &[&str]) -> bool {
  lines.iter().any(|line| parse_directive(line) == Some(Directive::File))
}

fn apply_directive(directive: Directive, ignore_depth: &mut usize, skip_next_line: &mut bool) {
  match directive {
    Directive::Start => *ignore_depth += 1,
    Directive::End => *ignore_depth = ignore_depth.saturating_sub(1),
    Directive::Line => *skip_next_line = true,
    Directive::File => {}
  }
}

/// Strip ignored regions. Returns `None` when the whole file is ignored.
pub fn preprocess(content: &str) -> Option<String> {
  let lines: Vec<&str> = content.lines().collect();

  if is_ignored_file(&lines) {
    return None;
  }

  let mut kept = Vec::with_capacity(lines.len());
  let mut ignore_depth = 0;
  let mut skip_next_line = false;

  for line in lines {
    if skip_next_line {
      skip_next_line = false;
      continue;
    }

    if let Some(directive) = parse_directive(line) {
      apply_directive(directive, &mut ignore_depth, &mut skip_next_line);
      continue;
    }

    if ignore_depth == 0 {
      kept.push(line);
    }
  }

  Some(kept.join("\n"))
}
