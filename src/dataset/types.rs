use std::fmt;

use serde::{Deserialize, Serialize};

/// Treatment group identifier (e.g. "CK1", "TK").
///
/// Identity is the label string; there is no registry of valid groups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(String);

impl Group {
    /// Create a group from its label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The group label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Group {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Sampling time of a measurement.
///
/// Only "before" and "after" matter: trend segments run from `Early` to `Late`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingTime {
    /// First sampling (January in the reference trial)
    Early,
    /// Second sampling (April in the reference trial)
    Late,
}

impl SamplingTime {
    /// Both sampling times, in chronological order
    pub const ALL: [SamplingTime; 2] = [SamplingTime::Early, SamplingTime::Late];

    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingTime::Early => "early",
            SamplingTime::Late => "late",
        }
    }
}

impl fmt::Display for SamplingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measured quantity of a replicate series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Ascorbic acid (vitamin C), mg/100 g
    AscorbicAcid,
    /// Soluble sugar concentration
    Sugar,
    /// Titratable acid concentration
    Acid,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::AscorbicAcid => "ascorbic acid",
            Metric::Sugar => "sugar",
            Metric::Acid => "acid",
        };
        f.write_str(name)
    }
}
