// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chart construction and export.
//!
//! One render call produces one figure with one set of axes: a line per
//! method with asymmetric error bars, a legend with human-readable
//! labels, and one output file per configured export format. Legend
//! population is decoupled from the error-bar artifacts: only the line
//! series carries a label, so the legend never picks up the malformed
//! glyphs the error-bar primitive would contribute.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use plotters::chart::{ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;

use matrix_charts_core::{
    Category, ChartError, LineStyle, Marker, MethodRecord, MethodStyle, MetricKind, Result,
};

use crate::config::{ExportFormat, GraphStyleConfig, LegendLocation};
use crate::extents::error_bar_extents;
use crate::label::legend_label;
use crate::theme::{init_theme, parse_hex_color, Theme};

/// Margin around the plot area, in pixels.
const FIGURE_MARGIN: i32 = 15;
/// Height reserved for the x axis labels, in pixels.
const X_LABEL_AREA: i32 = 50;
/// Width reserved for the y axis labels, in pixels.
const Y_LABEL_AREA: i32 = 80;
/// Length of the line glyph drawn in legend entries, in pixels.
const LEGEND_GLYPH_LEN: i32 = 24;
/// Nominal SVG resolution (CSS pixels per inch).
const SVG_DPI: u32 = 96;

/// One method's data prepared for drawing.
struct SeriesPlot {
    label: String,
    style: MethodStyle,
    /// (size, mean) for every point with a present mean cell.
    points: Vec<(f64, f64)>,
    /// (x, low, mid, high) error-bar coordinates, aligned with `points`.
    bars: Vec<(f64, f64, f64, f64)>,
}

fn render_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

fn legend_position(location: LegendLocation) -> SeriesLabelPosition {
    match location {
        LegendLocation::UpperRight => SeriesLabelPosition::UpperRight,
        LegendLocation::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendLocation::LowerRight => SeriesLabelPosition::LowerRight,
        LegendLocation::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendLocation::MiddleRight => SeriesLabelPosition::MiddleRight,
        LegendLocation::MiddleLeft => SeriesLabelPosition::MiddleLeft,
    }
}

/// Pad a linear range so points do not sit on the axes.
fn pad_range(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

/// Axis ranges covering every point and error-bar end.
///
/// For a logarithmic y axis the lower bound is the smallest positive
/// value in the data (bar ends at or below zero fall back to their
/// series mean), so the axis never receives a non-positive bound.
fn data_ranges(series: &[SeriesPlot], log_y: bool) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut y_min_pos = f64::INFINITY;

    for sp in series {
        for &(x, _) in &sp.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        for &(_, lo, mid, hi) in &sp.bars {
            y_min = y_min.min(lo);
            y_max = y_max.max(hi);
            let candidate = if lo > 0.0 { lo } else { mid };
            if candidate > 0.0 {
                y_min_pos = y_min_pos.min(candidate);
            }
        }
    }

    if !x_min.is_finite() {
        // No drawable data; render empty axes over a unit range.
        return ((0.0, 1.0), if log_y { (0.1, 10.0) } else { (0.0, 1.0) });
    }

    let x_range = pad_range(x_min, x_max);
    let y_range = if log_y {
        let lo = if y_min_pos.is_finite() { y_min_pos } else { 0.1 };
        let hi = if y_max > 0.0 { y_max } else { 1.0 };
        (lo * 0.8, hi * 1.25)
    } else {
        pad_range(y_min, y_max)
    };
    (x_range, y_range)
}

/// Renders benchmark records into chart image files.
///
/// Construction installs the process-wide [`Theme`]; see
/// [`crate::theme::init_theme`] for the write-once semantics.
pub struct ChartRenderer {
    config: GraphStyleConfig,
    theme: Theme,
}

impl ChartRenderer {
    /// Create a renderer with the given styling configuration.
    pub fn new(config: GraphStyleConfig) -> Self {
        let theme = *init_theme(&config.theme);
        ChartRenderer { config, theme }
    }

    /// The styling configuration this renderer draws with.
    pub fn config(&self) -> &GraphStyleConfig {
        &self.config
    }

    /// Render one chart and write it in every configured export format.
    ///
    /// `records` maps raw method names to their parsed data; `styles`
    /// maps the same names to display styles (absent entries get the
    /// default style). Records whose metric does not match, or which
    /// carry no usable mean data, are skipped. Returns the path of the
    /// primary (first-format) output file.
    ///
    /// # Errors
    ///
    /// [`ChartError::InvalidArgument`] when the metric is not produced
    /// by the category; [`ChartError::Render`] when the plotting
    /// backend fails.
    pub fn render_chart(
        &self,
        records: &BTreeMap<String, MethodRecord>,
        styles: &BTreeMap<String, MethodStyle>,
        category: Category,
        metric: MetricKind,
        title: Option<&str>,
        output_stem: &Path,
    ) -> Result<PathBuf> {
        if !metric.compatible_with(category) {
            return Err(ChartError::InvalidArgument(format!(
                "metric '{metric}' is not produced by the '{category}' category"
            )));
        }

        let series = self.build_series(records, styles, metric);
        let ranges = data_ranges(&series, self.config.log_scale_for(metric));

        let formats = if self.config.export.formats.is_empty() {
            vec![ExportFormat::Png]
        } else {
            self.config.export.formats.clone()
        };

        for format in &formats {
            let path = output_stem.with_extension(format.extension());
            match format {
                ExportFormat::Png => {
                    let dims = self.pixel_dims(self.config.export.png_dpi);
                    self.draw(BitMapBackend::new(&path, dims), &series, metric, title, ranges, true)?;
                }
                ExportFormat::Svg => {
                    let dims = self.pixel_dims(SVG_DPI);
                    let fill = !self.config.export.svg_transparent;
                    self.draw(SVGBackend::new(&path, dims), &series, metric, title, ranges, fill)?;
                }
            }
            info!(path = %path.display(), "chart saved");
        }

        Ok(output_stem.with_extension(formats[0].extension()))
    }

    /// Output pixel dimensions for the configured figure size.
    fn pixel_dims(&self, dpi: u32) -> (u32, u32) {
        let [w, h] = self.config.figure.size;
        (
            ((w * f64::from(dpi)).round() as u32).max(1),
            ((h * f64::from(dpi)).round() as u32).max(1),
        )
    }

    /// Prepare drawable series from the record map, in map order.
    fn build_series(
        &self,
        records: &BTreeMap<String, MethodRecord>,
        styles: &BTreeMap<String, MethodStyle>,
        metric: MetricKind,
    ) -> Vec<SeriesPlot> {
        let mut out = Vec::new();
        for (name, record) in records {
            if record.metric != metric || !record.series.has_data() {
                continue;
            }
            let (lower, upper) = error_bar_extents(
                &record.series.mean,
                record.series.min.as_deref(),
                record.series.max.as_deref(),
            );

            let mut points = Vec::new();
            let mut bars = Vec::new();
            for (i, (&size, mean)) in record
                .sizes
                .iter()
                .zip(record.series.mean.iter())
                .enumerate()
            {
                let Some(mean) = *mean else { continue };
                points.push((size, mean));
                bars.push((size, mean - lower[i], mean, mean + upper[i]));
            }

            out.push(SeriesPlot {
                label: legend_label(name),
                style: styles.get(name).cloned().unwrap_or_default(),
                points,
                bars,
            });
        }
        out
    }

    /// Draw the full figure onto one backend.
    fn draw<DB>(
        &self,
        backend: DB,
        series: &[SeriesPlot],
        metric: MetricKind,
        title: Option<&str>,
        ranges: ((f64, f64), (f64, f64)),
        fill_background: bool,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let root = backend.into_drawing_area();
        if fill_background {
            root.fill(&self.theme.background).map_err(render_err)?;
        }

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(FIGURE_MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA);
        if let Some(title) = title {
            builder.caption(
                title,
                ("sans-serif", self.config.axes.title_font_size)
                    .into_font()
                    .color(&self.theme.text),
            );
        }

        let ((x_lo, x_hi), (y_lo, y_hi)) = ranges;
        if self.config.log_scale_for(metric) {
            let mut chart = builder
                .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())
                .map_err(render_err)?;
            self.draw_on(&mut chart, series, metric)?;
        } else {
            let mut chart = builder
                .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
                .map_err(render_err)?;
            self.draw_on(&mut chart, series, metric)?;
        }

        root.present().map_err(render_err)?;
        Ok(())
    }

    /// Draw mesh, series, error bars and legend onto built axes.
    ///
    /// Generic over the y coordinate so the same code serves both the
    /// linear and the logarithmic axis.
    fn draw_on<'a, DB, YR>(
        &self,
        chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, YR>>,
        series: &[SeriesPlot],
        metric: MetricKind,
    ) -> Result<()>
    where
        DB: DrawingBackend + 'a,
        DB::ErrorType: 'static,
        YR: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let axes = &self.config.axes;
        let lines = &self.config.lines;
        let error_bars = &self.config.error_bars;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Matrix size")
            .y_desc(metric.axis_label())
            .axis_style(ShapeStyle::from(&self.theme.axis))
            .label_style(
                ("sans-serif", axes.tick_font_size)
                    .into_font()
                    .color(&self.theme.text),
            )
            .axis_desc_style(
                ("sans-serif", axes.label_font_size)
                    .into_font()
                    .color(&self.theme.text),
            );
        if axes.grid {
            mesh.bold_line_style(&self.theme.grid.mix(axes.grid_alpha))
                .light_line_style(&self.theme.grid.mix(axes.grid_alpha * 0.5));
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;

        for sp in series {
            let color = parse_hex_color(&sp.style.color).unwrap_or(self.theme.text);
            let stroke = ShapeStyle::from(&color.mix(lines.alpha))
                .stroke_width(lines.width.round() as u32);
            let bar_style = ShapeStyle::from(&color.mix(lines.alpha))
                .stroke_width(error_bars.width.round() as u32);

            // Error bars first, without a label, so they contribute no
            // legend glyph.
            chart
                .draw_series(sp.bars.iter().map(|&(x, lo, mid, hi)| {
                    ErrorBar::new_vertical(x, lo, mid, hi, bar_style, error_bars.cap_size)
                }))
                .map_err(render_err)?;

            let points = sp.points.clone();
            let anno = match sp.style.line_style {
                LineStyle::Solid => chart
                    .draw_series(LineSeries::new(points, stroke))
                    .map_err(render_err)?,
                LineStyle::Dashed => chart
                    .draw_series(DashedLineSeries::new(points, 10, 6, stroke))
                    .map_err(render_err)?,
                LineStyle::Dotted => chart
                    .draw_series(DashedLineSeries::new(points, 2, 5, stroke))
                    .map_err(render_err)?,
                LineStyle::DashDot => chart
                    .draw_series(DashedLineSeries::new(points, 8, 7, stroke))
                    .map_err(render_err)?,
            };
            anno.label(sp.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_GLYPH_LEN, y)], stroke)
            });

            self.draw_markers(chart, sp, color)?;
        }

        if series.iter().any(|sp| !sp.points.is_empty()) {
            let legend = &self.config.legend;
            let background = if legend.frameon {
                self.theme.background.mix(legend.framealpha)
            } else {
                TRANSPARENT
            };
            let border = if legend.frameon {
                ShapeStyle::from(&self.theme.axis)
            } else {
                ShapeStyle::from(&TRANSPARENT)
            };
            chart
                .configure_series_labels()
                .position(legend_position(legend.location))
                .background_style(&background)
                .border_style(border)
                .label_font(
                    ("sans-serif", legend.font_size)
                        .into_font()
                        .color(&self.theme.text),
                )
                .draw()
                .map_err(render_err)?;
        }

        Ok(())
    }

    /// Draw the series' point markers, if it has any configured.
    fn draw_markers<'a, DB, YR>(
        &self,
        chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, YR>>,
        sp: &SeriesPlot,
        color: RGBColor,
    ) -> Result<()>
    where
        DB: DrawingBackend + 'a,
        DB::ErrorType: 'static,
        YR: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        let size = self.config.lines.marker_size;
        let half = (size as i32 / 2).max(1);
        let fill = ShapeStyle::from(&color.mix(self.config.lines.alpha)).filled();
        let stroke = ShapeStyle::from(&color.mix(self.config.lines.alpha));

        match sp.style.marker {
            Some(Marker::Circle) => {
                chart
                    .draw_series(sp.points.iter().map(|&p| Circle::new(p, half, fill)))
                    .map_err(render_err)?;
            }
            Some(Marker::Square) => {
                chart
                    .draw_series(sp.points.iter().map(|&p| {
                        EmptyElement::at(p) + Rectangle::new([(-half, -half), (half, half)], fill)
                    }))
                    .map_err(render_err)?;
            }
            Some(Marker::Triangle) => {
                chart
                    .draw_series(
                        sp.points
                            .iter()
                            .map(|&p| TriangleMarker::new(p, half, fill)),
                    )
                    .map_err(render_err)?;
            }
            Some(Marker::Cross) => {
                chart
                    .draw_series(sp.points.iter().map(|&p| Cross::new(p, half, stroke)))
                    .map_err(render_err)?;
            }
            Some(Marker::Diamond) => {
                chart
                    .draw_series(sp.points.iter().map(|&p| {
                        EmptyElement::at(p)
                            + Polygon::new(vec![(0, -half), (half, 0), (0, half), (-half, 0)], fill)
                    }))
                    .map_err(render_err)?;
            }
            None => {}
        }
        Ok(())
    }
}
