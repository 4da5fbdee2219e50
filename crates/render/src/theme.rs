// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Process-wide chart theme.
//!
//! The theme is write-once global state, mirroring the rendering
//! backend's style-parameter model: it is initialized at most once per
//! process, at startup, and every chart drawn afterwards reads it.
//! Initializing it concurrently from independent chart-generation
//! requests is not supported; callers needing isolated themes should
//! run each request in a separate process.

use once_cell::sync::OnceCell;
use plotters::style::RGBColor;
use tracing::warn;

use crate::config::ThemeConfig;

static THEME: OnceCell<Theme> = OnceCell::new();

/// Parse a `#RRGGBB` hex string.
///
/// Returns `None` for anything else; callers substitute a default.
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}

/// Resolved theme colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Figure and axes background.
    pub background: RGBColor,
    /// Titles, axis labels and tick labels.
    pub text: RGBColor,
    /// Axis frame.
    pub axis: RGBColor,
    /// Grid lines.
    pub grid: RGBColor,
}

impl Theme {
    /// Resolve a theme from configuration, falling back per color to
    /// the dark-theme defaults for unparseable values.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = Theme::default();
        Theme {
            background: parse_hex_color(&config.background_color).unwrap_or(defaults.background),
            text: parse_hex_color(&config.text_color).unwrap_or(defaults.text),
            axis: parse_hex_color(&config.axis_color).unwrap_or(defaults.axis),
            grid: parse_hex_color(&config.grid_color).unwrap_or(defaults.grid),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: RGBColor(0x2E, 0x2E, 0x2E),
            text: RGBColor(0xFF, 0xFF, 0xFF),
            axis: RGBColor(0xCC, 0xCC, 0xCC),
            grid: RGBColor(0x44, 0x44, 0x44),
        }
    }
}

/// Initialize the process-wide theme from configuration.
///
/// The first call wins; subsequent calls (with any configuration) get
/// the already-installed theme back, with a warning if the requested
/// theme differs. This is an accepted limitation, not a safe concurrent
/// API.
pub fn init_theme(config: &ThemeConfig) -> &'static Theme {
    let requested = Theme::from_config(config);
    let installed = THEME.get_or_init(|| requested);
    if *installed != requested {
        warn!("process-wide theme already initialized, ignoring new theme configuration");
    }
    installed
}

/// The installed theme, or the default when none was initialized.
pub fn current_theme() -> Theme {
    THEME.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some(RGBColor(255, 255, 255)));
        assert_eq!(parse_hex_color("#2E2E2E"), Some(RGBColor(0x2E, 0x2E, 0x2E)));
        assert_eq!(parse_hex_color("#f7df1e"), Some(RGBColor(0xF7, 0xDF, 0x1E)));
        assert_eq!(parse_hex_color("FFFFFF"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_unparseable_colors_fall_back() {
        let config = ThemeConfig {
            background_color: "bogus".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.background, Theme::default().background);
        assert_eq!(theme.text, RGBColor(255, 255, 255));
    }

    #[test]
    fn test_init_theme_is_write_once() {
        let first = init_theme(&ThemeConfig::default());
        let second = init_theme(&ThemeConfig {
            background_color: "#000000".to_string(),
            ..ThemeConfig::default()
        });
        assert_eq!(first, second);
        assert_eq!(current_theme(), *first);
    }
}
