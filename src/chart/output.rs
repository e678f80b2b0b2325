use std::fmt;
use std::path::{Path, PathBuf};

use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::{Source, SystemSource};
use log::{debug, info, warn};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::encoding::VisualEncoding;
use crate::stats::SummaryTable;

use super::render::{draw_figure, FigureMetrics};
use super::style::FALLBACK_FONT_FAMILY;
use super::{ChartError, ChartLayout, ChartStyle};

/// Image format of the rendered chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster image via the bitmap backend
    Png,
    /// Vector image via the SVG backend
    Svg,
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("svg") => Ok(OutputFormat::Svg),
            Some(other) => Err(ChartError::render_target(
                path,
                format!("unsupported image format '.{other}' (expected .png or .svg)"),
            )),
            None => Err(ChartError::render_target(
                path,
                "no file extension to infer the image format from",
            )),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Summary of a completed render
#[derive(Debug, Clone)]
pub struct RenderStats {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
    /// Font family actually used (after fallback)
    pub font_family: String,
    pub markers: usize,
    pub error_bars: usize,
    pub trends: usize,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rendered {} markers, {} error bars and {} trends to {} ({}x{} {}, font '{}')",
            self.markers,
            self.error_bars,
            self.trends,
            self.path.display(),
            self.width,
            self.height,
            self.format,
            self.font_family
        )
    }
}

/// Render the chart, inferring the format from the path extension
pub fn render_to_file(
    path: impl AsRef<Path>,
    table: &SummaryTable,
    encoding: &VisualEncoding,
    style: &ChartStyle,
) -> Result<RenderStats, ChartError> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    render_with_format(path, format, table, encoding, style)
}

/// Render the chart in an explicit format.
///
/// Configuration problems are reported before the output file is touched; the file
/// is either written completely or an error is returned.
pub fn render_with_format(
    path: impl AsRef<Path>,
    format: OutputFormat,
    table: &SummaryTable,
    encoding: &VisualEncoding,
    style: &ChartStyle,
) -> Result<RenderStats, ChartError> {
    let path = path.as_ref();
    check_target(path)?;

    let layout = ChartLayout::build(table, encoding, style)?;
    let font_family = resolve_font_family(&style.font_family)?;
    let dims = (style.width, style.height);

    info!("Rendering {} chart to {}", format, path.display());

    let metrics = match format {
        OutputFormat::Png => {
            let root = BitMapBackend::new(path, dims).into_drawing_area();
            let metrics = draw_figure(&root, &layout, style, &font_family)
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            root.present()
                .map_err(|e| ChartError::render_target(path, e.to_string()))?;
            metrics
        }
        OutputFormat::Svg => {
            let root = SVGBackend::new(path, dims).into_drawing_area();
            let metrics = draw_figure(&root, &layout, style, &font_family)
                .map_err(|e| ChartError::Drawing(e.to_string()))?;
            root.present()
                .map_err(|e| ChartError::render_target(path, e.to_string()))?;
            metrics
        }
    };
    log_metrics(&metrics);

    Ok(RenderStats {
        path: path.to_path_buf(),
        format,
        width: style.width,
        height: style.height,
        font_family,
        markers: layout.markers.len(),
        error_bars: layout.error_bars.len(),
        trends: layout.trends.len(),
    })
}

fn check_target(path: &Path) -> Result<(), ChartError> {
    if path.is_dir() {
        return Err(ChartError::render_target(path, "path is a directory"));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(
            ChartError::render_target(path, "parent directory does not exist"),
        ),
        _ => Ok(()),
    }
}

/// Pick the configured font family, or the sans-serif fallback when it cannot be loaded
pub fn resolve_font_family(requested: &str) -> Result<String, ChartError> {
    if font_available(requested) {
        return Ok(requested.to_string());
    }

    warn!(
        "Font family '{}' is not available, falling back to '{}'",
        requested, FALLBACK_FONT_FAMILY
    );
    if font_available(FALLBACK_FONT_FAMILY) {
        return Ok(FALLBACK_FONT_FAMILY.to_string());
    }

    Err(ChartError::FontUnavailable {
        requested: requested.to_string(),
        fallback: FALLBACK_FONT_FAMILY.to_string(),
    })
}

/// True when the system has this exact family and plotters can lay text out with it.
///
/// Plotters falls back to sans-serif on its own when a family is missing, so the
/// family is looked up by name first.
fn font_available(family: &str) -> bool {
    let source = SystemSource::new();
    let installed = match generic_family(family) {
        Some(generic) => source
            .select_best_match(&[generic], &Properties::new())
            .is_ok(),
        None => source
            .select_family_by_name(family)
            .map(|handle| !handle.is_empty())
            .unwrap_or(false),
    };

    installed
        && FontDesc::new(FontFamily::from(family), 12.0, FontStyle::Normal)
            .box_size("Ag")
            .is_ok()
}

fn generic_family(family: &str) -> Option<FamilyName> {
    match family.to_ascii_lowercase().as_str() {
        "serif" => Some(FamilyName::Serif),
        "sans-serif" | "sans serif" => Some(FamilyName::SansSerif),
        "monospace" => Some(FamilyName::Monospace),
        _ => None,
    }
}

fn log_metrics(metrics: &FigureMetrics) {
    debug!("Plot area: {:?}", metrics.plot);
    debug!("Sampling-time legend: {:?}", metrics.time_legend);
    debug!("Group legend: {:?}", metrics.group_legend);
    debug!("Annotation: {:?}", metrics.annotation);
    if metrics.annotation.intersects(&metrics.group_legend) {
        warn!("Annotation overlaps the group legend; consider a larger figure");
    }
}
