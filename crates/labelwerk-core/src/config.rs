// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::sheet::SheetPreset;

/// Raster and vector rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width of one bar module in pixels.
    pub module_width: u32,
    /// Bar height in pixels.
    pub bar_height: u32,
    /// Blank margin around linear symbols, in pixels.
    pub quiet_zone: u32,
    /// Logical width and height of QR SVG output.
    pub qr_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 100,
            quiet_zone: 10,
            qr_size: 200,
        }
    }
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sheet preset selected when no template is given.
    pub default_preset: SheetPreset,
    /// Symbol rendering parameters.
    pub render: RenderOptions,
    /// Where downloads and print documents are written (current directory if unset).
    pub output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_preset: SheetPreset::A4Labels65,
            render: RenderOptions::default(),
            output_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "default_preset": "a4-10", "render": { "bar_height": 60 } }"#)
                .unwrap();
        assert_eq!(config.default_preset, SheetPreset::A4Labels10);
        assert_eq!(config.render.bar_height, 60);
        assert_eq!(config.render.module_width, 2);
        assert_eq!(config.output_dir, None);
    }
}
