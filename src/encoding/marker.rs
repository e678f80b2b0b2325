use serde::{Deserialize, Serialize};

use crate::dataset::SamplingTime;

/// Marker glyph of a scatter point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// Marker shape, size and legend label of one sampling time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStyle {
    pub time: SamplingTime,
    /// Legend label, e.g. "Jan"
    pub label: String,
    pub marker: MarkerShape,
    /// Marker area in pt²
    pub area: f64,
}

impl TimeStyle {
    pub fn new(time: SamplingTime, label: impl Into<String>, marker: MarkerShape, area: f64) -> Self {
        Self {
            time,
            label: label.into(),
            marker,
            area,
        }
    }

    /// Half the marker edge length in points (area = edge²)
    pub fn half_size_pt(&self) -> f64 {
        self.area.sqrt() / 2.0
    }
}
