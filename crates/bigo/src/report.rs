//! Rendering of analysis results
//!
//! Pretty output follows an aligned table: a label, dot padding, and a
//! severity-coloured complexity class in the right-hand column.

use colored::*;
use serde::Serialize;

use crate::{ComplexityClass, ComplexityResult, SourceLanguage};

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 100;
const PADDING: usize = 2;

/// Complexity ceilings a result is checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ceilings {
  pub max_time: Option<ComplexityClass>,
  pub max_space: Option<ComplexityClass>,
}

impl Ceilings {
  /// Describe every ceiling the result exceeds
  pub fn breaches(&self, result: &ComplexityResult) -> Vec<String> {
    let mut breaches = Vec::new();
    if let Some(max) = self.max_time {
      if result.time_complexity.exceeds(max) {
        breaches.push(format!("time {} exceeds {}", result.time_complexity, max));
      }
    }
    if let Some(max) = self.max_space {
      if result.space_complexity.exceeds(max) {
        breaches.push(format!("space {} exceeds {}", result.space_complexity, max));
      }
    }
    breaches
  }
}

/// Analysis of one input together with where it came from
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
  pub path: String,
  pub language: SourceLanguage,
  pub result: ComplexityResult,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub violations: Vec<String>,
}

impl FileReport {
  pub fn new(path: impl Into<String>, language: SourceLanguage, result: ComplexityResult, ceilings: &Ceilings) -> Self {
    let violations = ceilings.breaches(&result);
    Self { path: path.into(), language, result, violations }
  }

  pub fn is_violation(&self) -> bool {
    !self.violations.is_empty()
  }
}

/// Width of the output table, from the terminal when there is one
pub fn table_width() -> usize {
  console::Term::stdout()
    .size_checked()
    .map(|(_, columns)| columns as usize)
    .unwrap_or(DEFAULT_WIDTH)
    .clamp(40, MAX_WIDTH)
}

fn colorize(class: ComplexityClass) -> ColoredString {
  let label = class.to_string();
  match class.rank() {
    Some(0..=2) => label.green(),
    Some(3) => label.yellow(),
    Some(_) => label.red().bold(),
    None => label.magenta(),
  }
}

fn truncate_left(text: &str, max_width: usize) -> String {
  let count = text.chars().count();
  if count <= max_width {
    return text.to_string();
  }
  let keep = max_width.saturating_sub(3);
  let tail: String = text.chars().skip(count - keep).collect();
  format!("...{tail}")
}

/// One aligned row: `label`, fill characters, then the class
fn aligned_row(label: &str, class: ComplexityClass, fill: char, width: usize) -> String {
  let class_width = console::measure_text_width(&class.to_string());
  let label_width = width.saturating_sub(class_width + PADDING);
  let label = truncate_left(label, label_width);
  let fill_len = label_width.saturating_sub(console::measure_text_width(&label));

  format!("{label}{} {}", fill.to_string().repeat(fill_len + 1), colorize(class))
}

/// Multi-line human readable report
pub fn render_pretty(report: &FileReport, width: usize) -> String {
  let result = &report.result;
  let mut out = Vec::new();

  let title = format!("{} ({})", report.path, report.language.display_name());
  out.push(aligned_row(&title, result.time_complexity, '-', width));
  out.push(format!("  {} {}  {} {}", "time:".bold(), colorize(result.time_complexity), "space:".bold(), colorize(result.space_complexity)));
  out.push(format!("  {}", result.explanation.italic()));

  for item in &result.breakdown {
    out.push(aligned_row(&format!("  - {}", item.operation), item.complexity, '.', width));
    out.push(format!("      {}", item.description.dimmed()));
  }

  for violation in &report.violations {
    out.push(format!("  {} {}", "exceeded:".red().bold(), violation));
  }

  out.join("\n")
}

/// One line per input: path, time, space
pub fn render_compact(report: &FileReport) -> String {
  let marker = if report.is_violation() { " !" } else { "" };
  format!(
    "{}\t{}\t{}{marker}",
    report.path, report.result.time_complexity, report.result.space_complexity
  )
}

pub fn render_json(reports: &[&FileReport]) -> serde_json::Result<String> {
  serde_json::to_string_pretty(reports)
}
