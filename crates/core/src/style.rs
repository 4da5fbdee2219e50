// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Per-method display styling.
//!
//! Styles are resolved from the method-styling configuration by
//! normalized method name. Resolution has no failure mode: a method
//! absent from the configuration (or carrying an unrecognized token)
//! receives the documented default of a solid white line with no marker.

use serde::{Deserialize, Serialize};

/// Default line color for methods without a configured color.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Line style for a plotted series.
///
/// Parsed from the matplotlib-style tokens the styling configuration
/// uses; unrecognized tokens fall back to [`LineStyle::Solid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// A continuous line (`-`).
    #[default]
    Solid,
    /// A dashed line (`--`).
    Dashed,
    /// A dotted line (`:`).
    Dotted,
    /// Alternating dashes and dots (`-.`).
    DashDot,
}

impl LineStyle {
    /// Parse a configuration token, falling back to `Solid`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "--" | "dashed" => LineStyle::Dashed,
            ":" | "dotted" => LineStyle::Dotted,
            "-." | "dashdot" => LineStyle::DashDot,
            _ => LineStyle::Solid,
        }
    }
}

/// Point marker for a plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Filled circle (`o`).
    Circle,
    /// Filled square (`s`).
    Square,
    /// Upward triangle (`^`).
    Triangle,
    /// Diagonal cross (`x`).
    Cross,
    /// Diamond (`D`).
    Diamond,
}

impl Marker {
    /// Parse a configuration token. Unrecognized tokens yield `None`,
    /// which draws the series without markers.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "o" | "circle" => Some(Marker::Circle),
            "s" | "square" => Some(Marker::Square),
            "^" | "triangle" => Some(Marker::Triangle),
            "x" | "cross" => Some(Marker::Cross),
            "D" | "d" | "diamond" => Some(Marker::Diamond),
            _ => None,
        }
    }
}

/// Resolved display style for one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodStyle {
    /// Line color as a `#RRGGBB` hex string.
    pub color: String,
    /// Line style.
    pub line_style: LineStyle,
    /// Point marker, if any.
    pub marker: Option<Marker>,
}

impl Default for MethodStyle {
    fn default() -> Self {
        MethodStyle {
            color: DEFAULT_COLOR.to_string(),
            line_style: LineStyle::Solid,
            marker: None,
        }
    }
}
