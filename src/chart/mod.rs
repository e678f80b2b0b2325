//! # Chart Module
//!
//! Renders the summary table as a scatter chart of sugar–acid ratio (x) against
//! ascorbic acid (y).
//!
//! ## Figure Elements
//!
//! 1. **Markers**: one per (sampling time, group), colored by group, shaped and
//!    sized by sampling time, black edged.
//!
//! 2. **Error bars**: ±1 standard deviation on both axes with small end ticks.
//!
//! 3. **Trends**: one dashed segment per group from the early to the late point.
//!
//! 4. **Legends**: a sampling-time legend (upper left) and a treatment legend
//!    (lower right), drawn as separate boxes so both stay visible.
//!
//! 5. **Annotation**: a caption on a rounded, translucent box below the first legend.
//!
//! Opacity follows a fixed hierarchy: markers > error bars > trends.
//!
//! Geometry is computed up front by [`ChartLayout::build`], so everything except
//! the final drawing can be checked without a backend.

mod error;
mod geometry;
mod layout;
mod output;
mod render;
mod style;

#[cfg(test)]
mod tests;

pub use error::ChartError;
pub use geometry::{LegendPlacement, PixelRect};
pub use layout::{
    padded_range, AnnotationLayout, ChartLayout, ErrorBarLayout, LegendEntry, LegendLayout,
    MarkerLayout, TrendLayout,
};
pub use output::{render_to_file, render_with_format, resolve_font_family, OutputFormat, RenderStats};
pub use style::{
    ChartStyle, ERROR_BAR_OPACITY, FALLBACK_FONT_FAMILY, GRID_OPACITY, MARKER_OPACITY,
    TREND_OPACITY,
};
