// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Measurement file discovery and parsing.
//!
//! This crate turns a benchmark category and a list of method names into
//! normalized [`MethodRecord`]s ready for rendering:
//!
//! 1. [`scan`] - find the latest measurement file per method by the
//!    timestamp embedded in its filename
//! 2. validation - fail fast with the full missing/available picture
//!    before parsing anything
//! 3. [`parse`] - read a semicolon-delimited, comma-decimal measurement
//!    file into an index-aligned record
//! 4. [`config`] - resolve per-method display styles from the static
//!    styling configuration
//!
//! # Example
//!
//! ```no_run
//! use matrix_charts_collector::Collector;
//! use matrix_charts_core::Category;
//!
//! let collector = Collector::new("raw_results", "config");
//! let records = collector.collect(Category::Isolated, &["js_base".into()])?;
//! for (name, record) in &records {
//!     println!("{name}: {} data points", record.len());
//! }
//! # Ok::<(), matrix_charts_core::ChartError>(())
//! ```
//!
//! [`MethodRecord`]: matrix_charts_core::MethodRecord

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod collect;
pub mod config;
pub mod parse;
pub mod scan;

pub use collect::Collector;
pub use config::MethodStyleConfig;
