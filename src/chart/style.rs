use plotters::style::RGBColor;

use crate::encoding::HexColor;

/// Opacity of scatter markers (most prominent layer)
pub const MARKER_OPACITY: f64 = 0.7;
/// Opacity of error bars
pub const ERROR_BAR_OPACITY: f64 = 0.5;
/// Opacity of dashed trend segments (least prominent data layer)
pub const TREND_OPACITY: f64 = 0.3;
/// Opacity of the dashed background grid
pub const GRID_OPACITY: f64 = 0.6;
/// Opacity of the annotation background box
pub const ANNOTATION_BOX_OPACITY: f64 = 0.5;
/// Opacity of legend frames
pub const LEGEND_FRAME_OPACITY: f64 = 0.8;

/// Gray used for sampling-time legend swatches
pub const LEGEND_SWATCH_GRAY: HexColor = HexColor::new(0x80, 0x80, 0x80);
/// Grid line color
pub const GRID_COLOR: HexColor = HexColor::new(0xb0, 0xb0, 0xb0);
/// Annotation box fill ("wheat")
pub const ANNOTATION_BOX_COLOR: HexColor = HexColor::new(0xf5, 0xde, 0xb3);
/// Legend frame edge
pub const LEGEND_EDGE_COLOR: HexColor = HexColor::new(0xcc, 0xcc, 0xcc);

/// Family used when the configured font cannot be loaded
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

/// Figure dimensions, typography, labels and anchors.
///
/// Sizes are in points and converted to pixels with [`ChartStyle::px`], so the
/// figure keeps its proportions at any DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Pixels per inch used to convert point sizes
    pub dpi: f64,
    /// Font family for all text; falls back to sans-serif when unavailable
    pub font_family: String,

    pub tick_font_pt: f64,
    pub label_font_pt: f64,
    pub legend_font_pt: f64,
    pub legend_title_pt: f64,
    pub annotation_font_pt: f64,

    pub x_label: String,
    pub y_label: String,
    pub time_legend_title: String,
    pub group_legend_title: String,
    pub annotation: String,

    /// Upper-left corner of the sampling-time legend, in axes fractions
    pub time_legend_anchor: (f64, f64),
    /// Upper-left corner of the annotation, in axes fractions
    pub annotation_anchor: (f64, f64),

    /// Half length of the error bar end ticks
    pub cap_size_pt: f64,
    /// Line width of error bars and trends
    pub line_width_pt: f64,
    /// Fraction of the data span added on each side of both axes
    pub axis_margin: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            dpi: 100.0,
            font_family: "SimHei".to_string(),
            tick_font_pt: 18.0,
            label_font_pt: 20.0,
            legend_font_pt: 18.0,
            legend_title_pt: 18.0,
            annotation_font_pt: 18.0,
            x_label: "Sugar–acid ratio".to_string(),
            y_label: "Ascorbic acid (mg/100 g)".to_string(),
            time_legend_title: "Month".to_string(),
            group_legend_title: "Treatment".to_string(),
            annotation: "High Quality: High VC + High S/A Ratio".to_string(),
            time_legend_anchor: (0.02, 0.99),
            annotation_anchor: (0.02, 0.82),
            cap_size_pt: 3.0,
            line_width_pt: 1.5,
            axis_margin: 0.05,
        }
    }
}

impl ChartStyle {
    /// Convert a size in points to whole pixels
    pub fn px(&self, pt: f64) -> i32 {
        (pt * self.dpi / 72.0).round() as i32
    }

    /// Like [`ChartStyle::px`], never below one pixel
    pub fn px_u32(&self, pt: f64) -> u32 {
        self.px(pt).max(1) as u32
    }
}

impl From<HexColor> for RGBColor {
    fn from(color: HexColor) -> Self {
        RGBColor(color.r, color.g, color.b)
    }
}
