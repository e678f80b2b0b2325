//! TOML configuration file support.
//!
//! Chart settings and the visual encoding can be kept in a config file instead of
//! passing flags:
//!
//! ```toml
//! # qualplot.toml
//! [chart]
//! output = "figure.svg"
//! width = 1600
//! height = 1000
//! font_family = "Arial"
//!
//! [[encoding.groups]]
//! group = "CK1"
//! color = "#1f77b4"
//!
//! [[encoding.times]]
//! time = "early"
//! label = "Jan"
//! marker = "circle"
//! area = 150.0
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use qualplot::chart::ChartStyle;
use qualplot::encoding::VisualEncoding;

/// Root configuration structure for qualplot.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Figure settings.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Replaces the reference encoding when present.
    pub encoding: Option<VisualEncoding>,
}

/// Configuration for the rendered figure.
#[derive(Debug, Default, Deserialize)]
pub struct ChartConfig {
    /// Output image path.
    pub output: Option<PathBuf>,

    /// Figure width in pixels.
    pub width: Option<u32>,

    /// Figure height in pixels.
    pub height: Option<u32>,

    /// Font family for all chart text.
    pub font_family: Option<String>,

    /// Annotation caption.
    pub annotation: Option<String>,

    /// Axis labels.
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// The configured encoding, or the reference encoding
    pub fn encoding(&self) -> VisualEncoding {
        self.encoding.clone().unwrap_or_default()
    }

    /// Apply the configured chart settings on top of `style`
    pub fn apply_to(&self, style: &mut ChartStyle) {
        let chart = &self.chart;
        if let Some(width) = chart.width {
            style.width = width;
        }
        if let Some(height) = chart.height {
            style.height = height;
        }
        if let Some(family) = &chart.font_family {
            style.font_family = family.clone();
        }
        if let Some(annotation) = &chart.annotation {
            style.annotation = annotation.clone();
        }
        if let Some(label) = &chart.x_label {
            style.x_label = label.clone();
        }
        if let Some(label) = &chart.y_label {
            style.y_label = label.clone();
        }
    }
}
