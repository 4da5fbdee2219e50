// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsed per-method measurement series.
//!
//! One [`MethodRecord`] is produced per requested method from its latest
//! measurement file. All series are index-aligned with `sizes`; a cell
//! that failed numeric coercion is `None`, never a sentinel value, so
//! consumers must handle absence explicitly.

use serde::{Deserialize, Serialize};

use crate::category::MetricKind;

/// Mean / min / max series for one method, index-aligned with the
/// record's problem sizes.
///
/// `min` and `max` are independently optional: a file may carry either,
/// both, or neither of the spread columns. When one is absent the
/// corresponding error-bar extent degenerates to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Mean measurement per problem size. Unparseable cells are `None`.
    pub mean: Vec<Option<f64>>,
    /// Minimum measurement per problem size, if the file carried it.
    pub min: Option<Vec<Option<f64>>>,
    /// Maximum measurement per problem size, if the file carried it.
    pub max: Option<Vec<Option<f64>>>,
}

impl MetricSeries {
    /// Whether the series carries at least one usable mean value.
    pub fn has_data(&self) -> bool {
        self.mean.iter().any(Option::is_some)
    }
}

/// Measurement data for one benchmarked method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Normalized method name (see [`crate::Category::normalize_method_name`]).
    pub name: String,
    /// Problem sizes (matrix dimensions), in file order.
    pub sizes: Vec<f64>,
    /// Which metric the series holds.
    pub metric: MetricKind,
    /// The measurement series, index-aligned with `sizes`.
    pub series: MetricSeries,
}

impl MethodRecord {
    /// Number of data points in the record.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the record has no data points at all.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Check the alignment invariant: every present series has exactly
    /// one value per problem size.
    pub fn is_aligned(&self) -> bool {
        let n = self.sizes.len();
        self.series.mean.len() == n
            && self.series.min.as_ref().map_or(true, |s| s.len() == n)
            && self.series.max.as_ref().map_or(true, |s| s.len() == n)
    }
}
