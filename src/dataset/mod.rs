//! # Dataset Module
//!
//! Raw replicate measurements of a treatment trial, keyed by sampling time and
//! treatment group. Each entry carries three replicate series: ascorbic acid (VC),
//! sugar and acid.
//!
//! The reference trial (four groups, two samplings, five replicates per series) is
//! available through [`Dataset::reference`]. Other trials can be loaded from TOML:
//!
//! ```toml
//! [[entries]]
//! time = "early"
//! group = "CK1"
//! vc = [14.23, 14.42, 13.46, 14.23, 13.85]
//! sugar = [1.9829, 2.0698, 2.0935, 2.02635, 2.0461]
//! acid = [0.9112, 0.938, 0.8844, 0.9112, 0.8844]
//! ```

mod error;
mod reference;
mod types;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

pub use error::DatasetError;
pub use types::{Group, Metric, SamplingTime};

/// Replicate series measured for one group at one sampling time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Sampling time
    pub time: SamplingTime,
    /// Treatment group
    pub group: Group,
    /// Ascorbic acid replicates (mg/100 g)
    pub vc: Vec<f64>,
    /// Sugar replicates
    pub sugar: Vec<f64>,
    /// Acid replicates
    pub acid: Vec<f64>,
}

impl DatasetEntry {
    pub fn new(
        time: SamplingTime,
        group: impl Into<Group>,
        vc: Vec<f64>,
        sugar: Vec<f64>,
        acid: Vec<f64>,
    ) -> Self {
        Self {
            time,
            group: group.into(),
            vc,
            sugar,
            acid,
        }
    }

    /// Replicate values for one metric
    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::AscorbicAcid => &self.vc,
            Metric::Sugar => &self.sugar,
            Metric::Acid => &self.acid,
        }
    }

    /// Total number of replicate values across all metrics
    pub fn value_count(&self) -> usize {
        self.vc.len() + self.sugar.len() + self.acid.len()
    }
}

#[derive(Deserialize)]
struct DatasetFile {
    #[serde(default)]
    entries: Vec<DatasetEntry>,
}

/// Validated collection of dataset entries.
///
/// Every group appears exactly once per sampling time.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    entries: Vec<DatasetEntry>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicates and groups missing a sampling time
    pub fn new(entries: Vec<DatasetEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert((entry.time, entry.group.clone())) {
                return Err(DatasetError::DuplicateEntry {
                    group: entry.group.clone(),
                    time: entry.time,
                });
            }
        }

        let dataset = Self { entries };
        for group in dataset.groups() {
            for time in SamplingTime::ALL {
                if !seen.contains(&(time, group.clone())) {
                    return Err(DatasetError::IncompleteGroup {
                        group: group.clone(),
                        missing: time,
                    });
                }
            }
        }

        debug!(
            "Dataset validated: {} entries, {} groups",
            dataset.entries.len(),
            dataset.groups().len()
        );
        Ok(dataset)
    }

    /// The built-in reference trial
    pub fn reference() -> Self {
        Self {
            entries: reference::entries(),
        }
    }

    /// Load a dataset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a dataset from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = toml::from_str(content)?;
        Self::new(file.entries)
    }

    /// All entries in input order
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    /// Look up the entry for a sampling time and group
    pub fn entry(&self, time: SamplingTime, group: &Group) -> Option<&DatasetEntry> {
        self.entries
            .iter()
            .find(|e| e.time == time && &e.group == group)
    }

    /// Groups in order of first appearance
    pub fn groups(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for entry in &self.entries {
            if !groups.contains(&entry.group) {
                groups.push(entry.group.clone());
            }
        }
        groups
    }

    /// Total number of scalar replicate values
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(DatasetEntry::value_count).sum()
    }
}
