// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Graph styling configuration.
//!
//! A single JSON file (`graph_styles.json`) holds the chart's named
//! tunables in sections mirroring the figure anatomy: `theme`, `axes`,
//! `legend`, `figure`, `scales`, `lines`, `error_bars` and `export`.
//! Every field carries a documented default applied at load time, so a
//! missing key, section or file never fails - it just renders the stock
//! dark-theme chart.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Filename of the graph styling configuration.
pub const GRAPH_STYLE_FILE: &str = "graph_styles.json";

fn default_background_color() -> String {
    "#2E2E2E".to_string()
}
fn default_text_color() -> String {
    "#FFFFFF".to_string()
}
fn default_axis_color() -> String {
    "#CCCCCC".to_string()
}
fn default_grid_color() -> String {
    "#444444".to_string()
}
fn default_label_font_size() -> f64 {
    14.0
}
fn default_title_font_size() -> f64 {
    16.0
}
fn default_tick_font_size() -> f64 {
    12.0
}
fn default_true() -> bool {
    true
}
fn default_grid_alpha() -> f64 {
    0.3
}
fn default_legend_font_size() -> f64 {
    12.0
}
fn default_legend_location() -> LegendLocation {
    LegendLocation::UpperRight
}
fn default_frame_alpha() -> f64 {
    0.9
}
fn default_figure_size() -> [f64; 2] {
    [12.0, 8.0]
}
fn default_line_width() -> f64 {
    2.5
}
fn default_marker_size() -> u32 {
    8
}
fn default_line_alpha() -> f64 {
    0.8
}
fn default_cap_size() -> u32 {
    4
}
fn default_error_bar_width() -> f64 {
    2.0
}
fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Png]
}
fn default_png_dpi() -> u32 {
    300
}

/// Theme colors applied process-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Figure and axes background. Default `#2E2E2E`.
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Titles, axis labels and tick labels. Default `#FFFFFF`.
    #[serde(default = "default_text_color")]
    pub text_color: String,
    /// Axis frame. Default `#CCCCCC`.
    #[serde(default = "default_axis_color")]
    pub axis_color: String,
    /// Grid lines. Default `#444444`.
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background_color: default_background_color(),
            text_color: default_text_color(),
            axis_color: default_axis_color(),
            grid_color: default_grid_color(),
        }
    }
}

/// Axis labeling and grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    /// Axis description font size. Default 14.
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,
    /// Chart title font size. Default 16.
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    /// Tick label font size. Default 12.
    #[serde(default = "default_tick_font_size")]
    pub tick_font_size: f64,
    /// Whether to draw the grid. Default true.
    #[serde(default = "default_true")]
    pub grid: bool,
    /// Grid line opacity. Default 0.3.
    #[serde(default = "default_grid_alpha")]
    pub grid_alpha: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        AxesConfig {
            label_font_size: default_label_font_size(),
            title_font_size: default_title_font_size(),
            tick_font_size: default_tick_font_size(),
            grid: true,
            grid_alpha: default_grid_alpha(),
        }
    }
}

/// Legend placement inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendLocation {
    /// Top-right corner (the default).
    UpperRight,
    /// Top-left corner.
    UpperLeft,
    /// Bottom-right corner.
    LowerRight,
    /// Bottom-left corner.
    LowerLeft,
    /// Vertically centered on the right edge.
    MiddleRight,
    /// Vertically centered on the left edge.
    MiddleLeft,
}

/// Legend styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Legend entry font size. Default 12.
    #[serde(default = "default_legend_font_size")]
    pub font_size: f64,
    /// Placement. Default upper-right.
    #[serde(default = "default_legend_location")]
    pub location: LegendLocation,
    /// Whether to draw the legend frame. Default true.
    #[serde(default = "default_true")]
    pub frameon: bool,
    /// Frame background opacity. Default 0.9.
    #[serde(default = "default_frame_alpha")]
    pub framealpha: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        LegendConfig {
            font_size: default_legend_font_size(),
            location: default_legend_location(),
            frameon: true,
            framealpha: default_frame_alpha(),
        }
    }
}

/// Figure geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Width and height in inches. Default 12x8.
    #[serde(default = "default_figure_size")]
    pub size: [f64; 2],
}

impl Default for FigureConfig {
    fn default() -> Self {
        FigureConfig {
            size: default_figure_size(),
        }
    }
}

/// Per-metric axis scale toggles.
///
/// Both measurement kinds typically span multiple orders of magnitude
/// across problem sizes, so the y axis is logarithmic by default for
/// each, independently toggleable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalesConfig {
    /// Log-scale y axis for execution-time charts. Default true.
    #[serde(default = "default_true")]
    pub performance_log_scale: bool,
    /// Log-scale y axis for RPS charts. Default true.
    #[serde(default = "default_true")]
    pub rps_log_scale: bool,
}

impl Default for ScalesConfig {
    fn default() -> Self {
        ScalesConfig {
            performance_log_scale: true,
            rps_log_scale: true,
        }
    }
}

/// Plotted line styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinesConfig {
    /// Stroke width in points. Default 2.5.
    #[serde(default = "default_line_width")]
    pub width: f64,
    /// Marker size in pixels. Default 8.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    /// Line opacity. Default 0.8.
    #[serde(default = "default_line_alpha")]
    pub alpha: f64,
}

impl Default for LinesConfig {
    fn default() -> Self {
        LinesConfig {
            width: default_line_width(),
            marker_size: default_marker_size(),
            alpha: default_line_alpha(),
        }
    }
}

/// Error bar styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBarConfig {
    /// Cap width in pixels. Default 4.
    #[serde(default = "default_cap_size")]
    pub cap_size: u32,
    /// Bar stroke width in points. Default 2.
    #[serde(default = "default_error_bar_width")]
    pub width: f64,
}

impl Default for ErrorBarConfig {
    fn default() -> Self {
        ErrorBarConfig {
            cap_size: default_cap_size(),
            width: default_error_bar_width(),
        }
    }
}

/// Image export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster output via the bitmap backend.
    Png,
    /// Vector output via the SVG backend.
    Svg,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Export formats and per-format tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Formats to write, one file each. Default `["png"]`.
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,
    /// PNG resolution in dots per inch. Default 300.
    #[serde(default = "default_png_dpi")]
    pub png_dpi: u32,
    /// Transparent background for SVG output. Default true.
    #[serde(default = "default_true")]
    pub svg_transparent: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            formats: default_formats(),
            png_dpi: default_png_dpi(),
            svg_transparent: true,
        }
    }
}

/// The full graph styling configuration, loaded once and read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStyleConfig {
    /// Theme colors.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Axis labeling and grid.
    #[serde(default)]
    pub axes: AxesConfig,
    /// Legend styling.
    #[serde(default)]
    pub legend: LegendConfig,
    /// Figure geometry.
    #[serde(default)]
    pub figure: FigureConfig,
    /// Per-metric scale toggles.
    #[serde(default)]
    pub scales: ScalesConfig,
    /// Line styling.
    #[serde(default)]
    pub lines: LinesConfig,
    /// Error bar styling.
    #[serde(default)]
    pub error_bars: ErrorBarConfig,
    /// Export formats.
    #[serde(default)]
    pub export: ExportConfig,
}

impl GraphStyleConfig {
    /// Load the configuration from `<config_dir>/graph_styles.json`.
    ///
    /// A missing or unreadable file degrades to the all-defaults
    /// configuration rather than failing.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(GRAPH_STYLE_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "graph style config not found, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "graph style config unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Whether the y axis is logarithmic for the given metric.
    pub fn log_scale_for(&self, metric: matrix_charts_core::MetricKind) -> bool {
        match metric {
            matrix_charts_core::MetricKind::Performance => self.scales.performance_log_scale,
            matrix_charts_core::MetricKind::Rps => self.scales.rps_log_scale,
        }
    }
}
