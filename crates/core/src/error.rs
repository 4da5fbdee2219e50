// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unified error type for the collect-and-render pipeline.
//!
//! Every failure is deterministic (bad arguments, missing files, broken
//! schemas), so nothing here is retried; errors surface straight to the
//! caller. A single invocation either produces a complete chart or fails
//! whole - there is no partial success.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while collecting measurement data or rendering charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Unrecognized category, or a metric requested for a category that
    /// does not produce it.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The category subdirectory does not exist under the data directory.
    #[error("benchmark directory not found: {}", .path.display())]
    NotFound {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// One or more requested methods have no measurement file.
    ///
    /// Carries both lists so the caller can self-correct without a
    /// second scan.
    #[error("no measurement data for methods [{}]; available: [{}]", .missing.join(", "), .available.join(", "))]
    MissingData {
        /// Requested methods with no matching file.
        missing: Vec<String>,
        /// Methods that do have a measurement file.
        available: Vec<String>,
    },

    /// A selected measurement file lacks one or more required columns.
    #[error("missing columns [{}] in {}", .columns.join(", "), .path.display())]
    SchemaError {
        /// The column names that were required but absent.
        columns: Vec<String>,
        /// The file that was being parsed.
        path: PathBuf,
    },

    /// An I/O or decoding failure reading a measurement file.
    #[error("failed to read measurement data from {}: {}", .path.display(), .source)]
    ParseFailure {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O or CSV error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The plotting backend failed while drawing or writing a figure.
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Result type for chart pipeline operations.
pub type Result<T> = std::result::Result<T, ChartError>;
