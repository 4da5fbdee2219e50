// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart rendering for the matrix benchmark chart toolkit.
//!
//! Consumes the normalized records produced by the collector and emits
//! line charts with asymmetric error bars:
//!
//! - [`config`] - Graph styling configuration with documented defaults
//! - [`theme`] - The write-once process-wide theme
//! - [`extents`] - Error-bar extent arithmetic
//! - [`label`] - Legend label formatting
//! - [`chart`] - Figure construction and multi-format export
//!
//! # Example
//!
//! ```no_run
//! use std::collections::BTreeMap;
//! use std::path::Path;
//! use matrix_charts_core::{Category, MetricKind};
//! use matrix_charts_render::{ChartRenderer, GraphStyleConfig};
//!
//! let renderer = ChartRenderer::new(GraphStyleConfig::default());
//! let records = BTreeMap::new();
//! let styles = BTreeMap::new();
//! let output = renderer.render_chart(
//!     &records,
//!     &styles,
//!     Category::Isolated,
//!     MetricKind::Performance,
//!     Some("Execution time"),
//!     Path::new("isolated_js_base"),
//! )?;
//! println!("chart saved to {}", output.display());
//! # Ok::<(), matrix_charts_core::ChartError>(())
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod chart;
pub mod config;
pub mod extents;
pub mod label;
pub mod theme;

pub use chart::ChartRenderer;
pub use config::{ExportFormat, GraphStyleConfig};
pub use theme::Theme;
