// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark category and metric enumerations.
//!
//! Measurement files live in one subdirectory per category, and every
//! category produces exactly one kind of metric. Both dimensions are
//! closed enumerations validated at the boundary so that every
//! consumption site can match exhaustively instead of dispatching on
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Benchmark category, naming the subdirectory measurement files live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Single-run timing benchmarks (execution time per matrix size).
    Isolated,
    /// Request-throughput benchmarks against a running server.
    Server,
}

impl Category {
    /// The subdirectory name under the data directory.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Isolated => "isolated",
            Category::Server => "server",
        }
    }

    /// The metric kind this category's measurement files carry.
    pub fn metric(&self) -> MetricKind {
        match self {
            Category::Isolated => MetricKind::Performance,
            Category::Server => MetricKind::Rps,
        }
    }

    /// Whether method names from this category are normalized
    /// (hyphens replaced with underscores) before building derived
    /// column names.
    ///
    /// The upstream file-naming convention applies this only to
    /// isolated benchmarks; server data columns use the raw name.
    pub fn normalizes_method_names(&self) -> bool {
        matches!(self, Category::Isolated)
    }

    /// Normalize a method name according to this category's convention.
    pub fn normalize_method_name(&self, name: &str) -> String {
        if self.normalizes_method_names() {
            name.replace('-', "_")
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isolated" => Ok(Category::Isolated),
            "server" => Ok(Category::Server),
            other => Err(ChartError::InvalidArgument(format!(
                "unknown benchmark category '{other}', expected 'isolated' or 'server'"
            ))),
        }
    }
}

/// Kind of metric a measurement series holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Execution time in milliseconds (isolated benchmarks).
    Performance,
    /// Requests per second (server benchmarks).
    Rps,
}

impl MetricKind {
    /// Human-readable y-axis label for this metric.
    pub fn axis_label(&self) -> &'static str {
        match self {
            MetricKind::Performance => "Execution time (ms)",
            MetricKind::Rps => "Requests per second (RPS)",
        }
    }

    /// Check that this metric can be rendered for the given category.
    ///
    /// RPS data only exists for server benchmarks; performance data
    /// only for isolated ones.
    pub fn compatible_with(&self, category: Category) -> bool {
        category.metric() == *self
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Performance => f.write_str("performance"),
            MetricKind::Rps => f.write_str("rps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("isolated".parse::<Category>().unwrap(), Category::Isolated);
        assert_eq!("server".parse::<Category>().unwrap(), Category::Server);
        assert!("batch".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_metric_mapping() {
        assert_eq!(Category::Isolated.metric(), MetricKind::Performance);
        assert_eq!(Category::Server.metric(), MetricKind::Rps);
    }

    #[test]
    fn test_normalization_is_isolated_only() {
        assert_eq!(
            Category::Isolated.normalize_method_name("accelerate-async"),
            "accelerate_async"
        );
        assert_eq!(
            Category::Server.normalize_method_name("accelerate-async"),
            "accelerate-async"
        );
    }

    #[test]
    fn test_metric_compatibility() {
        assert!(MetricKind::Rps.compatible_with(Category::Server));
        assert!(!MetricKind::Rps.compatible_with(Category::Isolated));
        assert!(MetricKind::Performance.compatible_with(Category::Isolated));
    }
}
