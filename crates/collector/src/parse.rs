// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Measurement file parsing.
//!
//! Measurement files are semicolon-delimited tabular text with a header
//! row and comma as the decimal separator. The key column is
//! `matrix_size`; per-method metric columns are derived by prefixing the
//! normalized method name (`avg_js_base`, `min_js_base`, ...).
//!
//! Leniency boundary: a structurally broken file (missing required
//! columns, unreadable) is an error, but individual cells that fail
//! numeric coercion become missing values. A few bad readings must not
//! abort an otherwise-valid file.

use std::path::Path;

use tracing::debug;

use matrix_charts_core::{Category, ChartError, MethodRecord, MetricSeries, Result};

/// Key column carrying the problem size.
pub const SIZE_COLUMN: &str = "matrix_size";

/// Parse one numeric cell, treating comma as the decimal separator.
///
/// Returns `None` for anything that does not coerce to a float.
fn parse_decimal(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.replace(',', ".").parse::<f64>().ok()
}

fn read_failure(path: &Path, source: impl std::error::Error + Send + Sync + 'static) -> ChartError {
    ChartError::ParseFailure {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

/// Load the measurement record for one method from its selected file.
///
/// The method name is normalized per the category's convention before
/// the derived column names are built. `matrix_size` and the `avg_`
/// column are required; `min_` and `max_` are each included only if
/// present, independently of the other.
///
/// Rows whose `matrix_size` cell fails numeric coercion are dropped
/// whole, keeping every series index-aligned.
///
/// # Errors
///
/// - [`ChartError::SchemaError`] naming the missing required columns
/// - [`ChartError::ParseFailure`] for I/O or CSV-level failures
pub fn load_method_record(
    method_name: &str,
    path: &Path,
    category: Category,
) -> Result<MethodRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| read_failure(path, e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| read_failure(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let name = category.normalize_method_name(method_name);
    let avg_col = format!("avg_{name}");
    let min_col = format!("min_{name}");
    let max_col = format!("max_{name}");

    let column = |wanted: &str| headers.iter().position(|h| h == wanted);

    let (size_idx, avg_idx) = match (column(SIZE_COLUMN), column(&avg_col)) {
        (Some(size_idx), Some(avg_idx)) => (size_idx, avg_idx),
        (size_idx, avg_idx) => {
            let mut columns = Vec::new();
            if size_idx.is_none() {
                columns.push(SIZE_COLUMN.to_string());
            }
            if avg_idx.is_none() {
                columns.push(avg_col);
            }
            return Err(ChartError::SchemaError {
                columns,
                path: path.to_path_buf(),
            });
        }
    };
    let min_idx = column(&min_col);
    let max_idx = column(&max_col);

    let mut sizes = Vec::new();
    let mut mean = Vec::new();
    let mut min = min_idx.map(|_| Vec::new());
    let mut max = max_idx.map(|_| Vec::new());

    for row in reader.records() {
        let row = row.map_err(|e| read_failure(path, e))?;

        // A row without a usable problem size cannot be aligned with
        // the rest of the chart; drop it across all series.
        let Some(size) = row.get(size_idx).and_then(parse_decimal) else {
            continue;
        };
        sizes.push(size);
        mean.push(row.get(avg_idx).and_then(parse_decimal));
        if let (Some(series), Some(idx)) = (min.as_mut(), min_idx) {
            series.push(row.get(idx).and_then(parse_decimal));
        }
        if let (Some(series), Some(idx)) = (max.as_mut(), max_idx) {
            series.push(row.get(idx).and_then(parse_decimal));
        }
    }

    debug!(method = %name, points = sizes.len(), path = %path.display(), "loaded measurement file");

    Ok(MethodRecord {
        name,
        sizes,
        metric: category.metric(),
        series: MetricSeries { mean, min, max },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_csv(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal(" 100 "), Some(100.0));
        assert_eq!(parse_decimal("3.25"), Some(3.25));
        assert_eq!(parse_decimal("n/a"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_load_full_record() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "x.csv",
            "matrix_size;avg_x;min_x;max_x\n100;50,0;40,0;60,0\n",
        );

        let rec = load_method_record("x", &path, Category::Isolated).unwrap();
        assert_eq!(rec.sizes, vec![100.0]);
        assert_eq!(rec.series.mean, vec![Some(50.0)]);
        assert_eq!(rec.series.min, Some(vec![Some(40.0)]));
        assert_eq!(rec.series.max, Some(vec![Some(60.0)]));
        assert!(rec.is_aligned());
    }

    #[test]
    fn test_headers_are_trimmed() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "x.csv", " matrix_size ; avg_x \n200;1,5\n");

        let rec = load_method_record("x", &path, Category::Isolated).unwrap();
        assert_eq!(rec.sizes, vec![200.0]);
        assert_eq!(rec.series.mean, vec![Some(1.5)]);
    }

    #[test]
    fn test_min_and_max_are_independently_optional() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "x.csv", "matrix_size;avg_x;min_x\n100;50,0;40,0\n");

        let rec = load_method_record("x", &path, Category::Isolated).unwrap();
        assert_eq!(rec.series.min, Some(vec![Some(40.0)]));
        assert_eq!(rec.series.max, None);
    }

    #[test]
    fn test_missing_avg_column_is_schema_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "x.csv", "matrix_size;min_x\n100;40,0\n");

        let err = load_method_record("x", &path, Category::Isolated).unwrap_err();
        match err {
            ChartError::SchemaError { columns, .. } => assert_eq!(columns, vec!["avg_x"]),
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_cells_become_missing_not_errors() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "x.csv",
            "matrix_size;avg_x\n100;50,0\n200;oops\n300;70,0\n",
        );

        let rec = load_method_record("x", &path, Category::Isolated).unwrap();
        assert_eq!(rec.series.mean, vec![Some(50.0), None, Some(70.0)]);
    }

    #[test]
    fn test_rows_without_size_are_dropped_whole() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(
            &tmp,
            "x.csv",
            "matrix_size;avg_x;min_x\n100;50,0;40,0\n;1,0;2,0\n300;70,0;60,0\n",
        );

        let rec = load_method_record("x", &path, Category::Isolated).unwrap();
        assert_eq!(rec.sizes, vec![100.0, 300.0]);
        assert_eq!(rec.series.mean, vec![Some(50.0), Some(70.0)]);
        assert_eq!(rec.series.min, Some(vec![Some(40.0), Some(60.0)]));
        assert!(rec.is_aligned());
    }

    #[test]
    fn test_isolated_normalizes_hyphens_in_derived_columns() {
        let tmp = TempDir::new().unwrap();
        // Filename convention hyphenates; data columns use underscores.
        let path = write_csv(
            &tmp,
            "x.csv",
            "matrix_size;avg_accelerate_async\n100;5,5\n",
        );

        let rec =
            load_method_record("accelerate-async", &path, Category::Isolated).unwrap();
        assert_eq!(rec.name, "accelerate_async");
        assert_eq!(rec.series.mean, vec![Some(5.5)]);
    }

    #[test]
    fn test_server_keeps_raw_method_name() {
        let tmp = TempDir::new().unwrap();
        let path = write_csv(&tmp, "x.csv", "matrix_size;avg_accelerate_async\n100;5,5\n");

        let err =
            load_method_record("accelerate-async", &path, Category::Server).unwrap_err();
        match err {
            ChartError::SchemaError { columns, .. } => {
                assert_eq!(columns, vec!["avg_accelerate-async"])
            }
            other => panic!("expected SchemaError, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_file_is_parse_failure() {
        let err = load_method_record(
            "x",
            Path::new("/nonexistent/x_2025-01-01T00-00-00.csv"),
            Category::Isolated,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::ParseFailure { .. }));
    }
}
