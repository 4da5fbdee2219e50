// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Method styling configuration.
//!
//! A single JSON file (`method_colors.json`) maps normalized method
//! names to display attributes in three sections: `colors`,
//! `line_styles` and `markers`. Every lookup resolves to a documented
//! default when an entry (or the whole file) is absent; style
//! resolution has no failure mode.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use matrix_charts_core::{LineStyle, Marker, MethodStyle};

/// Filename of the method styling configuration.
pub const METHOD_STYLE_FILE: &str = "method_colors.json";

/// Static method-to-style mappings, loaded once and read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodStyleConfig {
    /// Method name to `#RRGGBB` color.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Method name to line-style token (`-`, `--`, `:`, `-.`).
    #[serde(default)]
    pub line_styles: HashMap<String, String>,
    /// Method name to marker token (`o`, `s`, `^`, `x`, `D`).
    #[serde(default)]
    pub markers: HashMap<String, String>,
}

impl MethodStyleConfig {
    /// Load the configuration from `<config_dir>/method_colors.json`.
    ///
    /// A missing or unreadable file degrades to empty mappings (all
    /// defaults apply) rather than failing.
    pub fn load(config_dir: &Path) -> Self {
        let path = config_dir.join(METHOD_STYLE_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "method style config not found, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "method style config unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the display style for a normalized method name.
    ///
    /// Absent entries receive the default style (solid white line, no
    /// marker); unrecognized tokens fall back field by field.
    pub fn style_for(&self, method_name: &str) -> MethodStyle {
        let default = MethodStyle::default();
        MethodStyle {
            color: self
                .colors
                .get(method_name)
                .cloned()
                .unwrap_or(default.color),
            line_style: self
                .line_styles
                .get(method_name)
                .map(|token| LineStyle::from_token(token))
                .unwrap_or(default.line_style),
            marker: self
                .markers
                .get(method_name)
                .and_then(|token| Marker::from_token(token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = MethodStyleConfig::load(tmp.path());
        assert!(config.colors.is_empty());
        assert_eq!(config.style_for("js_base"), MethodStyle::default());
    }

    #[test]
    fn test_configured_method_resolves_all_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(METHOD_STYLE_FILE),
            r##"{
                "colors": {"js_base": "#F7DF1E"},
                "line_styles": {"js_base": "--"},
                "markers": {"js_base": "o"}
            }"##,
        )
        .unwrap();

        let config = MethodStyleConfig::load(tmp.path());
        let style = config.style_for("js_base");
        assert_eq!(style.color, "#F7DF1E");
        assert_eq!(style.line_style, LineStyle::Dashed);
        assert_eq!(style.marker, Some(Marker::Circle));
    }

    #[test]
    fn test_partial_entry_falls_back_per_field() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(METHOD_STYLE_FILE),
            r##"{"colors": {"cpp_simd": "#659AD2"}, "line_styles": {"cpp_simd": "wavy"}}"##,
        )
        .unwrap();

        let config = MethodStyleConfig::load(tmp.path());
        let style = config.style_for("cpp_simd");
        assert_eq!(style.color, "#659AD2");
        assert_eq!(style.line_style, LineStyle::Solid);
        assert_eq!(style.marker, None);
    }
}
