// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Asymmetric error-bar extents.
//!
//! Error bars represent the distance from the mean down to the minimum
//! and up to the maximum. Both extents are clamped at zero so a min/max
//! inversion in anomalous data never produces a negative bar - the bar
//! degenerates to a flat marker instead.

/// Compute per-point lower/upper error-bar extents.
///
/// Returns vectors the same length as `mean`. When either spread series
/// is absent the method has no error information and every extent is
/// zero; the same holds per point for any missing cell.
pub fn error_bar_extents(
    mean: &[Option<f64>],
    min: Option<&[Option<f64>]>,
    max: Option<&[Option<f64>]>,
) -> (Vec<f64>, Vec<f64>) {
    let (Some(min), Some(max)) = (min, max) else {
        return (vec![0.0; mean.len()], vec![0.0; mean.len()]);
    };

    let mut lower = Vec::with_capacity(mean.len());
    let mut upper = Vec::with_capacity(mean.len());
    for (i, m) in mean.iter().enumerate() {
        let lo = match (m, min.get(i).copied().flatten()) {
            (Some(mean), Some(min)) => (mean - min).max(0.0),
            _ => 0.0,
        };
        let hi = match (m, max.get(i).copied().flatten()) {
            (Some(mean), Some(max)) => (max - mean).max(0.0),
            _ => 0.0,
        };
        lower.push(lo);
        upper.push(hi);
    }
    (lower, upper)
}
