// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for the matrix benchmark chart toolkit.
//!
//! Thin caller over the collector and renderer crates: parses the
//! category and method selection, runs the collect-and-render pipeline
//! and reports the output path. Methods can be given explicitly, picked
//! interactively from the available list, or just listed.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use matrix_charts_collector::Collector;
use matrix_charts_core::{Category, MethodStyle, MetricKind};
use matrix_charts_render::{ChartRenderer, GraphStyleConfig};

/// Default data directory, matching the benchmark runners' output.
const DEFAULT_DATA_DIR: &str = "raw_results";

/// Benchmark category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    /// Single-run timing benchmarks.
    Isolated,
    /// Request-throughput benchmarks.
    Server,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Isolated => Category::Isolated,
            CategoryArg::Server => Category::Server,
        }
    }
}

/// Generate comparison charts from matrix benchmark measurement files.
#[derive(Parser, Debug)]
#[command(name = "matrix-charts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmark category to chart.
    #[arg(short = 'b', long, value_enum)]
    pub category: CategoryArg,

    /// Method names to include in the chart.
    #[arg(short, long, num_args = 1.., group = "selection")]
    pub methods: Vec<String>,

    /// Pick methods interactively from the available list.
    #[arg(short, long, group = "selection")]
    pub interactive: bool,

    /// List available methods for the category and exit.
    #[arg(short, long, group = "selection")]
    pub list_methods: bool,

    /// Chart title override.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Data directory holding per-category measurement subdirectories.
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Directory with the styling configuration files.
    #[arg(short, long, default_value = "config")]
    pub config_dir: PathBuf,

    /// Directory generated charts are written to.
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Default chart title for a metric and method list.
fn default_title(metric: MetricKind, methods: &[String]) -> String {
    match metric {
        MetricKind::Performance => format!("Execution time - {}", methods.join(", ")),
        MetricKind::Rps => format!("RPS throughput - {}", methods.join(", ")),
    }
}

/// Output path stem for a chart.
///
/// Non-default data directories prefix the filename so charts from
/// different machines (e.g. `macos_results`) do not overwrite each
/// other.
fn output_stem(
    output_dir: &Path,
    data_dir: &Path,
    category: Category,
    methods: &[String],
) -> PathBuf {
    let methods_part = methods.join("_");
    let data_name = data_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_DATA_DIR);
    let base = if data_name == DEFAULT_DATA_DIR {
        format!("{category}_{methods_part}")
    } else {
        format!("{data_name}_{category}_{methods_part}")
    };
    output_dir.join(base)
}

/// Parse an interactive selection line into zero-based indices.
fn parse_selection(line: &str, available: usize) -> anyhow::Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in line.split_whitespace() {
        let number: usize = token
            .parse()
            .with_context(|| format!("'{token}' is not a number"))?;
        if number == 0 || number > available {
            anyhow::bail!("choice {number} is out of range 1..={available}");
        }
        indices.push(number - 1);
    }
    if indices.is_empty() {
        anyhow::bail!("no methods selected");
    }
    Ok(indices)
}

fn select_methods_interactively(
    collector: &Collector,
    category: Category,
) -> anyhow::Result<Vec<String>> {
    let available = collector.list_available_methods(category)?;
    if available.is_empty() {
        anyhow::bail!("no methods found for category '{category}'");
    }

    println!("Available methods for {category} benchmarks:");
    for (i, method) in available.iter().enumerate() {
        println!("  {:2}. {method}", i + 1);
    }
    println!("Select methods (e.g. '1 3 5', or 'all'):");

    let stdin = io::stdin();
    loop {
        print!(">>> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("selection cancelled");
        }
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            anyhow::bail!("selection cancelled");
        }
        if line.eq_ignore_ascii_case("all") {
            return Ok(available);
        }
        match parse_selection(line, available.len()) {
            Ok(indices) => {
                return Ok(indices.into_iter().map(|i| available[i].clone()).collect())
            }
            Err(e) => println!("invalid selection: {e}. Enter numbers like '1 3 5', or 'all'."),
        }
    }
}

/// Run the CLI with the process arguments.
///
/// # Errors
///
/// Any collection or rendering failure is surfaced with context; the
/// binary maps it to a message and a non-zero exit code.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(
        data_dir = %cli.data_dir.display(),
        config_dir = %cli.config_dir.display(),
        "starting chart generation"
    );

    let category: Category = cli.category.into();
    let collector = Collector::new(&cli.data_dir, &cli.config_dir);

    if cli.list_methods {
        let available = collector.list_available_methods(category)?;
        if available.is_empty() {
            println!(
                "No methods found for category '{category}' (data dir: {})",
                cli.data_dir.display()
            );
        } else {
            println!("Available methods for {category} benchmarks:");
            for method in &available {
                println!("  - {method}");
            }
        }
        return Ok(());
    }

    let methods = if cli.interactive {
        select_methods_interactively(&collector, category)?
    } else if !cli.methods.is_empty() {
        cli.methods.clone()
    } else {
        anyhow::bail!("specify --methods, or use --interactive / --list-methods");
    };

    let records = collector
        .collect(category, &methods)
        .context("failed to collect benchmark data")?;
    let styles: BTreeMap<String, MethodStyle> = methods
        .iter()
        .map(|m| (m.clone(), collector.method_style(m, category)))
        .collect();

    let renderer = ChartRenderer::new(GraphStyleConfig::load(&cli.config_dir));

    std::fs::create_dir_all(&cli.output_dir).with_context(|| {
        format!("failed to create output directory {}", cli.output_dir.display())
    })?;

    let metric = category.metric();
    let title = cli
        .title
        .clone()
        .unwrap_or_else(|| default_title(metric, &methods));
    let stem = output_stem(&cli.output_dir, &cli.data_dir, category, &methods);

    let output = renderer.render_chart(&records, &styles, category, metric, Some(&title), &stem)?;

    println!("{}", "Chart generated".green().bold());
    println!("  title:   {title}");
    println!("  output:  {}", output.display());
    println!("  methods: {} ({})", methods.len(), methods.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_selection_modes_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "matrix-charts",
            "--category",
            "isolated",
            "--methods",
            "js_base",
            "--list-methods",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_is_required() {
        let result = Cli::try_parse_from(["matrix-charts", "--methods", "js_base"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_title_per_metric() {
        let methods = vec!["js_base".to_string(), "cpp_simd".to_string()];
        assert_eq!(
            default_title(MetricKind::Performance, &methods),
            "Execution time - js_base, cpp_simd"
        );
        assert_eq!(
            default_title(MetricKind::Rps, &methods),
            "RPS throughput - js_base, cpp_simd"
        );
    }

    #[test]
    fn test_output_stem_prefixes_non_default_data_dir() {
        let methods = vec!["js_base".to_string(), "cpp_simd".to_string()];
        let stem = output_stem(
            Path::new("output"),
            Path::new("raw_results"),
            Category::Isolated,
            &methods,
        );
        assert_eq!(stem, Path::new("output/isolated_js_base_cpp_simd"));

        let stem = output_stem(
            Path::new("output"),
            Path::new("macos_results"),
            Category::Server,
            &methods,
        );
        assert_eq!(stem, Path::new("output/macos_results_server_js_base_cpp_simd"));
    }

    #[test]
    fn test_parse_selection_bounds_and_format() {
        assert_eq!(parse_selection("1 3", 5).unwrap(), vec![0, 2]);
        assert!(parse_selection("0", 5).is_err());
        assert!(parse_selection("6", 5).is_err());
        assert!(parse_selection("two", 5).is_err());
        assert!(parse_selection("", 5).is_err());
    }
}
