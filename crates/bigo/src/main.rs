use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};
use walkdir::WalkDir;

use bigo::report::{self, Ceilings, FileReport};
use bigo::{analyze_file, analyze_source, ComplexityClass, Config, OutputFormat, SourceLanguage};

const STDIN_PATH: &str = "-";

/// bigo - heuristic complexity analysis
#[derive(Parser)]
#[command(name = "bigo")]
#[command(about = "Estimate the time and space complexity of code snippets")]
#[command(version)]
struct Cli {
  /// Files or directories to analyze ("-" or nothing reads standard input)
  #[arg(value_name = "PATH")]
  paths: Vec<PathBuf>,

  /// Language of the input, instead of guessing from the file extension
  #[arg(short, long, value_enum)]
  language: Option<SourceLanguage>,

  /// Output format
  #[arg(short, long, value_enum)]
  format: Option<OutputFormat>,

  /// Fail when time complexity is worse than this, e.g. "O(n log n)"
  #[arg(long, value_name = "CLASS")]
  max_time: Option<ComplexityClass>,

  /// Fail when space complexity is worse than this, e.g. "O(n)"
  #[arg(long, value_name = "CLASS")]
  max_space: Option<ComplexityClass>,

  /// Configuration file path
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Only show inputs that exceed a ceiling
  #[arg(short, long)]
  quiet: bool,

  /// Enable debug logging on stderr
  #[arg(short, long)]
  verbose: bool,

  /// Print a sample snippet for a language and exit
  #[arg(long, value_enum, value_name = "LANG")]
  sample: Option<SourceLanguage>,
}

/// Something to analyze and the language it is in
struct Input {
  path: Option<PathBuf>,
  language: SourceLanguage,
}

impl Input {
  fn label(&self) -> String {
    self.path.as_ref().map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
  }
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(&cli) {
    Ok(true) => process::exit(1),
    Ok(false) => {}
    Err(e) => {
      eprintln!("{} {:#}", "error:".red().bold(), e);
      process::exit(2);
    }
  }
}

fn init_logging(verbose: bool) {
  let default_filter = if verbose { "bigo=debug" } else { "bigo=warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

/// Returns whether any input failed a ceiling or could not be analyzed
fn run(cli: &Cli) -> Result<bool> {
  if let Some(language) = cli.sample {
    println!("{}", language.sample());
    return Ok(false);
  }

  let config = match &cli.config {
    Some(path) => Config::load_from_file(path)?,
    None => Config::load()?,
  };
  let format = cli.format.unwrap_or(config.format);
  let ceilings = Ceilings {
    max_time: cli.max_time.or(config.max_time),
    max_space: cli.max_space.or(config.max_space),
  };

  let inputs = collect_inputs(cli, &config)?;
  tracing::debug!(inputs = inputs.len(), ?format, "collected inputs");

  let mut reports = Vec::new();
  let mut failed = false;

  for input in &inputs {
    match analyze_input(input) {
      Ok(Some(result)) => reports.push(FileReport::new(input.label(), input.language, result, &ceilings)),
      Ok(None) => tracing::info!(path = %input.label(), "skipped by ignore directive"),
      Err(e) => {
        eprintln!("{} {}: {:#}", "error:".red().bold(), input.label(), e);
        failed = true;
      }
    }
  }

  let violations = reports.iter().filter(|report| report.is_violation()).count();
  print_reports(&reports, format, cli.quiet)?;

  Ok(failed || violations > 0)
}

fn analyze_input(input: &Input) -> Result<Option<bigo::ComplexityResult>> {
  match &input.path {
    Some(path) => Ok(analyze_file(path, input.language)?),
    None => {
      let mut content = String::new();
      std::io::stdin().read_to_string(&mut content).context("Failed to read standard input")?;
      Ok(analyze_source(&content, input.language, "<stdin>")?)
    }
  }
}

fn collect_inputs(cli: &Cli, config: &Config) -> Result<Vec<Input>> {
  let fallback = cli.language.unwrap_or(config.default_language);

  if cli.paths.is_empty() {
    return Ok(vec![Input { path: None, language: fallback }]);
  }

  let ignore_set = config.ignore_set()?;
  let mut inputs = Vec::new();

  for path in &cli.paths {
    if path.as_os_str() == STDIN_PATH {
      inputs.push(Input { path: None, language: fallback });
    } else if path.is_file() {
      let language = cli.language.or_else(|| SourceLanguage::from_path(path)).unwrap_or(fallback);
      inputs.push(Input { path: Some(path.clone()), language });
    } else if path.is_dir() {
      inputs.extend(walk_directory(path, cli.language, config, &ignore_set));
    } else {
      eprintln!("{} {} is not a file or directory", "warning:".yellow().bold(), path.display());
    }
  }

  Ok(inputs)
}

/// Supported source files under `root`, in a stable order
fn walk_directory(
  root: &Path,
  forced: Option<SourceLanguage>,
  config: &Config,
  ignore_set: &globset::GlobSet,
) -> Vec<Input> {
  WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|entry| {
      let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
      !config.should_ignore(ignore_set, relative)
    })
    .filter_map(|entry| entry.ok())
    .filter(|entry| entry.file_type().is_file())
    .filter_map(|entry| {
      let detected = SourceLanguage::from_path(entry.path())?;
      Some(Input { path: Some(entry.into_path()), language: forced.unwrap_or(detected) })
    })
    .collect()
}

fn print_reports(reports: &[FileReport], format: OutputFormat, quiet: bool) -> Result<()> {
  let shown: Vec<&FileReport> = reports.iter().filter(|report| !quiet || report.is_violation()).collect();

  match format {
    OutputFormat::Json => println!("{}", report::render_json(&shown)?),
    OutputFormat::Compact => {
      for report in shown {
        println!("{}", report::render_compact(report));
      }
    }
    OutputFormat::Pretty => {
      let width = report::table_width();
      if !quiet {
        println!("{}", "bigo - Heuristic Complexity Analysis".purple().bold());
        println!("{}", "=".repeat(width));
      }
      for report in shown {
        println!("{}", report::render_pretty(report, width));
        println!();
      }
    }
  }

  Ok(())
}
