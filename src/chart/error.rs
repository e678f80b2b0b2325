use std::path::PathBuf;

use crate::encoding::EncodingError;
use crate::stats::StatsError;

/// Errors that can occur while laying out or rendering a chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Summary statistics could not be computed
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Visual encoding is invalid or does not cover the data
    #[error("{0}")]
    Encoding(#[from] EncodingError),

    /// The summary table has no records to plot
    #[error("Nothing to plot: summary table is empty")]
    NoData,

    /// Neither the configured nor the fallback font family can be loaded
    #[error("No usable font: '{requested}' and fallback '{fallback}' are unavailable")]
    FontUnavailable { requested: String, fallback: String },

    /// The output file cannot be created or written
    #[error("Cannot write chart to {}: {reason}", .path.display())]
    RenderTarget { path: PathBuf, reason: String },

    /// The drawing backend failed while drawing
    #[error("Drawing error: {0}")]
    Drawing(String),
}

impl ChartError {
    /// True when the data references a group or sampling time without an encoding
    pub fn is_configuration_mismatch(&self) -> bool {
        matches!(self, ChartError::Encoding(e) if e.is_configuration_mismatch())
    }

    pub(crate) fn render_target(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ChartError::RenderTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
