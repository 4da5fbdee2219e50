// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Directory scanning and latest-file selection.
//!
//! Measurement files are named `<method>_<YYYY-MM-DDTHH-MM-SS>.csv`
//! (hyphens stand in for colons in the time-of-day portion). Repeated
//! benchmark runs leave multiple files per method in place; the scanner
//! groups files by method and keeps only the one with the newest
//! embedded timestamp, so stale runs never need manual cleanup.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use matrix_charts_core::{Category, ChartError, Result};

/// Timestamp suffix at the end of a measurement file stem.
static TIMESTAMP_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2})$").expect("valid regex"));

/// Filename format of the embedded timestamp.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// One discovered measurement file, before latest-per-method reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIndexEntry {
    /// Method name extracted from the filename (pre-normalization).
    pub method_name: String,
    /// Timestamp embedded in the filename.
    pub timestamp: NaiveDateTime,
    /// Full path to the file.
    pub path: PathBuf,
}

/// Split a measurement filename into method name and timestamp.
///
/// Returns `None` for anything that is not a `.csv` file with the exact
/// timestamp suffix; such files are skipped silently by the scan, never
/// treated as an error.
pub fn parse_filename(filename: &str) -> Option<(String, NaiveDateTime)> {
    let stem = filename.strip_suffix(".csv")?;

    let m = TIMESTAMP_SUFFIX.find(stem)?;
    let timestamp = NaiveDateTime::parse_from_str(m.as_str(), TIMESTAMP_FORMAT).ok()?;

    let method_name = stem[..m.start()].trim_end_matches('_');
    if method_name.is_empty() {
        return None;
    }

    Some((method_name.to_string(), timestamp))
}

/// Scan a category subdirectory and select the latest measurement file
/// per method.
///
/// Returns a map from raw method name to the path of its newest file.
/// Timestamp ties resolve deterministically to the lexicographically
/// greatest path.
///
/// # Errors
///
/// [`ChartError::NotFound`] if the category subdirectory does not exist.
pub fn scan_directory(data_dir: &Path, category: Category) -> Result<BTreeMap<String, PathBuf>> {
    let benchmark_dir = data_dir.join(category.dir_name());
    if !benchmark_dir.is_dir() {
        return Err(ChartError::NotFound {
            path: benchmark_dir,
        });
    }

    let entries = std::fs::read_dir(&benchmark_dir).map_err(|e| ChartError::ParseFailure {
        path: benchmark_dir.clone(),
        source: Box::new(e),
    })?;

    let mut latest: BTreeMap<String, FileIndexEntry> = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| ChartError::ParseFailure {
            path: benchmark_dir.clone(),
            source: Box::new(e),
        })?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some((method_name, timestamp)) = parse_filename(name) else {
            continue;
        };

        let candidate = FileIndexEntry {
            method_name: method_name.clone(),
            timestamp,
            path: entry.path(),
        };
        match latest.get(&method_name) {
            Some(current)
                if (current.timestamp, &current.path) >= (candidate.timestamp, &candidate.path) => {}
            _ => {
                latest.insert(method_name, candidate);
            }
        }
    }

    let files: BTreeMap<String, PathBuf> = latest
        .into_iter()
        .map(|(name, entry)| (name, entry.path))
        .collect();

    debug!(
        category = %category,
        methods = files.len(),
        "scanned benchmark directory"
    );
    Ok(files)
}
