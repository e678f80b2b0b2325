use super::{Group, SamplingTime};

/// Errors that can occur while loading or validating a dataset
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error reading a dataset file
    #[error("Failed to read dataset file: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed TOML dataset
    #[error("Dataset parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Dataset contains no entries
    #[error("Dataset contains no entries")]
    Empty,

    /// The same (time, group) pair appears twice
    #[error("Duplicate dataset entry for group '{group}' at {time} sampling")]
    DuplicateEntry { group: Group, time: SamplingTime },

    /// A group is measured at one sampling time but not the other
    #[error("Group '{group}' has no entry for {missing} sampling")]
    IncompleteGroup { group: Group, missing: SamplingTime },
}
