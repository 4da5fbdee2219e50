// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! The data collector: scan, validate, parse.
//!
//! [`Collector`] ties the pipeline together for one invocation. All
//! requested methods are validated against the scan result before any
//! file is parsed, so a missing method fails fast with the complete
//! picture instead of aborting on the first absent file. A single
//! failure fails the whole request; no partial result is produced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use matrix_charts_core::{Category, ChartError, MethodRecord, MethodStyle, Result};

use crate::config::MethodStyleConfig;
use crate::parse::load_method_record;
use crate::scan::scan_directory;

/// Collects measurement records for a set of methods in one category.
#[derive(Debug)]
pub struct Collector {
    data_dir: PathBuf,
    style_config: MethodStyleConfig,
}

impl Collector {
    /// Create a collector over a data directory, loading the method
    /// styling configuration from `config_dir`.
    pub fn new(data_dir: impl AsRef<Path>, config_dir: impl AsRef<Path>) -> Self {
        Collector {
            data_dir: data_dir.as_ref().to_path_buf(),
            style_config: MethodStyleConfig::load(config_dir.as_ref()),
        }
    }

    /// Create a collector with an explicit styling configuration.
    pub fn with_style_config(data_dir: impl AsRef<Path>, style_config: MethodStyleConfig) -> Self {
        Collector {
            data_dir: data_dir.as_ref().to_path_buf(),
            style_config,
        }
    }

    /// The data directory this collector scans.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Check that every required method has a measurement file.
    ///
    /// # Errors
    ///
    /// [`ChartError::MissingData`] carrying both the missing and the
    /// available method lists.
    pub fn validate_methods(
        required: &[String],
        available: &BTreeMap<String, PathBuf>,
    ) -> Result<()> {
        let missing: Vec<String> = required
            .iter()
            .filter(|m| !available.contains_key(*m))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ChartError::MissingData {
                missing,
                available: available.keys().cloned().collect(),
            })
        }
    }

    /// Collect parsed records for the requested methods.
    ///
    /// Scans the category subdirectory, validates the request, then
    /// parses the latest file per method. The returned map is keyed by
    /// the raw (requested) method name.
    pub fn collect(
        &self,
        category: Category,
        methods: &[String],
    ) -> Result<BTreeMap<String, MethodRecord>> {
        let available = scan_directory(&self.data_dir, category)?;
        Self::validate_methods(methods, &available)?;

        let mut records = BTreeMap::new();
        for method in methods {
            let path = &available[method];
            let record = load_method_record(method, path, category)?;
            records.insert(method.clone(), record);
        }

        info!(
            category = %category,
            methods = records.len(),
            "collected benchmark data"
        );
        Ok(records)
    }

    /// All methods with at least one measurement file, sorted by name.
    pub fn list_available_methods(&self, category: Category) -> Result<Vec<String>> {
        let available = scan_directory(&self.data_dir, category)?;
        Ok(available.into_keys().collect())
    }

    /// Resolve the display style for a method.
    ///
    /// The name is normalized per the category convention before the
    /// lookup; absence from the configuration is not an error.
    pub fn method_style(&self, method_name: &str, category: Category) -> MethodStyle {
        let normalized = category.normalize_method_name(method_name);
        self.style_config.style_for(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_charts_core::MetricKind;
    use std::fs;
    use tempfile::TempDir;

    fn data_dir_with(files: &[(&str, &str)]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("isolated");
        fs::create_dir(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        tmp
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_methods_reports_missing_and_available() {
        let mut available = BTreeMap::new();
        available.insert("a".to_string(), PathBuf::from("a.csv"));

        let err = Collector::validate_methods(&strings(&["a", "b"]), &available).unwrap_err();
        match err {
            ChartError::MissingData { missing, available } => {
                assert_eq!(missing, vec!["b"]);
                assert_eq!(available, vec!["a"]);
            }
            other => panic!("expected MissingData, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_end_to_end() {
        let tmp = data_dir_with(&[(
            "m1_2025-01-01T00-00-00.csv",
            "matrix_size;avg_m1;min_m1;max_m1\n100;50,0;40,0;60,0\n200;80,0;75,0;90,0\n",
        )]);
        let collector = Collector::with_style_config(tmp.path(), MethodStyleConfig::default());

        let records = collector
            .collect(Category::Isolated, &strings(&["m1"]))
            .unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records["m1"];
        assert_eq!(rec.metric, MetricKind::Performance);
        assert_eq!(rec.sizes, vec![100.0, 200.0]);
        assert_eq!(rec.series.mean, vec![Some(50.0), Some(80.0)]);
    }

    #[test]
    fn test_collect_fails_whole_on_missing_method() {
        let tmp = data_dir_with(&[(
            "m1_2025-01-01T00-00-00.csv",
            "matrix_size;avg_m1\n100;50,0\n",
        )]);
        let collector = Collector::with_style_config(tmp.path(), MethodStyleConfig::default());

        let err = collector
            .collect(Category::Isolated, &strings(&["m1", "m2"]))
            .unwrap_err();
        assert!(matches!(err, ChartError::MissingData { .. }));
    }

    #[test]
    fn test_list_available_methods_is_sorted() {
        let tmp = data_dir_with(&[
            ("zeta_2025-01-01T00-00-00.csv", "matrix_size\n"),
            ("alpha_2025-01-01T00-00-00.csv", "matrix_size\n"),
        ]);
        let collector = Collector::with_style_config(tmp.path(), MethodStyleConfig::default());

        let methods = collector.list_available_methods(Category::Isolated).unwrap();
        assert_eq!(methods, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_method_style_normalizes_before_lookup() {
        let mut config = MethodStyleConfig::default();
        config
            .colors
            .insert("accelerate_async".to_string(), "#FF0000".to_string());
        let tmp = TempDir::new().unwrap();
        let collector = Collector::with_style_config(tmp.path(), config);

        let style = collector.method_style("accelerate-async", Category::Isolated);
        assert_eq!(style.color, "#FF0000");

        // Server names are looked up raw, so the hyphenated form misses.
        let style = collector.method_style("accelerate-async", Category::Server);
        assert_eq!(style, MethodStyle::default());
    }
}
