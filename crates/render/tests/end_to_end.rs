// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end collect-and-render pipeline tests.

use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use matrix_charts_collector::Collector;
use matrix_charts_core::{Category, MetricKind};
use matrix_charts_render::{ChartRenderer, ExportFormat, GraphStyleConfig};

fn small_config() -> GraphStyleConfig {
    let mut config = GraphStyleConfig::default();
    config.figure.size = [4.0, 3.0];
    config.export.png_dpi = 60;
    config
}

fn write_measurements(tmp: &TempDir) {
    let dir = tmp.path().join("isolated");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("m1_2025-01-01T00-00-00.csv"),
        "matrix_size;avg_m1;min_m1;max_m1\n100;10,5;9,0;12,0\n200;42,0;40,0;45,5\n",
    )
    .unwrap();
}

#[test]
fn test_collect_and_render_produces_png() {
    let tmp = TempDir::new().unwrap();
    write_measurements(&tmp);

    let collector = Collector::new(tmp.path(), tmp.path().join("config"));
    let methods = vec!["m1".to_string()];
    let records = collector.collect(Category::Isolated, &methods).unwrap();

    let styles: BTreeMap<_, _> = methods
        .iter()
        .map(|m| (m.clone(), collector.method_style(m, Category::Isolated)))
        .collect();

    let renderer = ChartRenderer::new(small_config());
    let stem = tmp.path().join("isolated_m1");
    let output = renderer
        .render_chart(
            &records,
            &styles,
            Category::Isolated,
            MetricKind::Performance,
            Some("Execution time - m1"),
            &stem,
        )
        .unwrap();

    assert_eq!(output, stem.with_extension("png"));
    let metadata = fs::metadata(&output).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_every_configured_format_is_written() {
    let tmp = TempDir::new().unwrap();
    write_measurements(&tmp);

    let collector = Collector::new(tmp.path(), tmp.path().join("config"));
    let methods = vec!["m1".to_string()];
    let records = collector.collect(Category::Isolated, &methods).unwrap();

    let mut config = small_config();
    config.export.formats = vec![ExportFormat::Png, ExportFormat::Svg];
    let renderer = ChartRenderer::new(config);

    let stem = tmp.path().join("isolated_m1_all");
    let primary = renderer
        .render_chart(
            &records,
            &BTreeMap::new(),
            Category::Isolated,
            MetricKind::Performance,
            None,
            &stem,
        )
        .unwrap();

    assert_eq!(primary, stem.with_extension("png"));
    assert!(stem.with_extension("png").is_file());
    assert!(stem.with_extension("svg").is_file());
}

#[test]
fn test_rerender_with_identical_inputs_succeeds() {
    let tmp = TempDir::new().unwrap();
    write_measurements(&tmp);

    let collector = Collector::new(tmp.path(), tmp.path().join("config"));
    let methods = vec!["m1".to_string()];
    let records = collector.collect(Category::Isolated, &methods).unwrap();

    let renderer = ChartRenderer::new(small_config());
    let stem = tmp.path().join("rerender");
    let first = renderer
        .render_chart(
            &records,
            &BTreeMap::new(),
            Category::Isolated,
            MetricKind::Performance,
            None,
            &stem,
        )
        .unwrap();
    let second = renderer
        .render_chart(
            &records,
            &BTreeMap::new(),
            Category::Isolated,
            MetricKind::Performance,
            None,
            &stem,
        )
        .unwrap();

    assert_eq!(first, second);
    assert!(second.is_file());
}

#[test]
fn test_single_point_chart_renders() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("server");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("js_base_2025-01-01T00-00-00.csv"),
        "matrix_size;avg_js_base\n100;2500,0\n",
    )
    .unwrap();

    let collector = Collector::new(tmp.path(), tmp.path().join("config"));
    let methods = vec!["js_base".to_string()];
    let records = collector.collect(Category::Server, &methods).unwrap();

    let renderer = ChartRenderer::new(small_config());
    let output = renderer
        .render_chart(
            &records,
            &BTreeMap::new(),
            Category::Server,
            MetricKind::Rps,
            Some("RPS throughput - js_base"),
            &tmp.path().join("server_js_base"),
        )
        .unwrap();

    assert!(output.is_file());
}
