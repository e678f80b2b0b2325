use crate::dataset::{Group, SamplingTime};

/// Errors in the visual encoding table
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodingError {
    /// A group in the data has no color assigned
    #[error("Configuration mismatch: no color encoding for group '{group}'")]
    MissingGroup { group: Group },

    /// A sampling time in the data has no marker assigned
    #[error("Configuration mismatch: no marker encoding for {time} sampling")]
    MissingSamplingTime { time: SamplingTime },

    /// A group is listed twice
    #[error("Group '{group}' is encoded more than once")]
    DuplicateGroup { group: Group },

    /// A sampling time is listed twice
    #[error("Sampling time '{time}' is encoded more than once")]
    DuplicateSamplingTime { time: SamplingTime },

    /// Color string is not `#rrggbb`
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Marker area must be a positive, finite number
    #[error("Invalid marker area {area} for {time} sampling")]
    InvalidMarkerArea { time: SamplingTime, area: f64 },
}

impl EncodingError {
    /// True for a key present in the data but absent from the encoding
    pub fn is_configuration_mismatch(&self) -> bool {
        matches!(
            self,
            EncodingError::MissingGroup { .. } | EncodingError::MissingSamplingTime { .. }
        )
    }
}
