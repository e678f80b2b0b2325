//! # Visual Encoding Module
//!
//! Static mapping from data keys to glyphs: each treatment group gets a color, each
//! sampling time a marker shape, size and legend label. The order of the group list
//! is the order of the treatment legend.
//!
//! Lookups fail fast: a group or sampling time that appears in the data but not in
//! the encoding is a configuration mismatch, never a silent default.

mod color;
mod error;
mod marker;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::{Group, SamplingTime};
use crate::stats::SummaryTable;

pub use color::HexColor;
pub use error::EncodingError;
pub use marker::{MarkerShape, TimeStyle};

/// Color assigned to one treatment group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStyle {
    pub group: Group,
    pub color: HexColor,
}

impl GroupStyle {
    pub fn new(group: impl Into<Group>, color: HexColor) -> Self {
        Self {
            group: group.into(),
            color,
        }
    }
}

/// Group colors and sampling-time markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualEncoding {
    #[serde(default)]
    pub groups: Vec<GroupStyle>,
    #[serde(default)]
    pub times: Vec<TimeStyle>,
}

impl VisualEncoding {
    /// Encoding of the reference trial: tab10 colors, circles in January, squares in April
    pub fn reference() -> Self {
        Self {
            groups: vec![
                GroupStyle::new("CK1", HexColor::new(0x1f, 0x77, 0xb4)),
                GroupStyle::new("CK2", HexColor::new(0xff, 0x7f, 0x0e)),
                GroupStyle::new("TK", HexColor::new(0x2c, 0xa0, 0x2c)),
                GroupStyle::new("TC", HexColor::new(0xd6, 0x27, 0x28)),
            ],
            times: vec![
                TimeStyle::new(SamplingTime::Early, "Jan", MarkerShape::Circle, 150.0),
                TimeStyle::new(SamplingTime::Late, "Apr", MarkerShape::Square, 120.0),
            ],
        }
    }

    /// Reject duplicate keys and non-positive marker areas
    pub fn validate(&self) -> Result<(), EncodingError> {
        let mut groups = HashSet::new();
        for style in &self.groups {
            if !groups.insert(&style.group) {
                return Err(EncodingError::DuplicateGroup {
                    group: style.group.clone(),
                });
            }
        }

        let mut times = HashSet::new();
        for style in &self.times {
            if !times.insert(style.time) {
                return Err(EncodingError::DuplicateSamplingTime { time: style.time });
            }
            if !(style.area.is_finite() && style.area > 0.0) {
                return Err(EncodingError::InvalidMarkerArea {
                    time: style.time,
                    area: style.area,
                });
            }
        }

        Ok(())
    }

    /// Color of a group
    pub fn color_of(&self, group: &Group) -> Result<HexColor, EncodingError> {
        self.groups
            .iter()
            .find(|s| &s.group == group)
            .map(|s| s.color)
            .ok_or_else(|| EncodingError::MissingGroup {
                group: group.clone(),
            })
    }

    /// Marker style of a sampling time
    pub fn time_style(&self, time: SamplingTime) -> Result<&TimeStyle, EncodingError> {
        self.times
            .iter()
            .find(|s| s.time == time)
            .ok_or(EncodingError::MissingSamplingTime { time })
    }

    /// Check that every key of a summary table has an encoding
    pub fn check_table(&self, table: &SummaryTable) -> Result<(), EncodingError> {
        for time in table.times() {
            self.time_style(time)?;
        }
        for group in table.groups() {
            self.color_of(&group)?;
        }
        Ok(())
    }
}

impl Default for VisualEncoding {
    fn default() -> Self {
        Self::reference()
    }
}
