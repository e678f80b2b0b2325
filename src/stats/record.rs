use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetEntry, Group, Metric, SamplingTime};

use super::{Descriptive, StatsError};

/// Identifies one summary record: a group at a sampling time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub time: SamplingTime,
    pub group: Group,
}

impl RecordKey {
    pub fn new(time: SamplingTime, group: impl Into<Group>) -> Self {
        Self {
            time,
            group: group.into(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group '{}' at {} sampling", self.group, self.time)
    }
}

/// Summaries of the three measured metrics, before the ratio is derived
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSummary {
    pub vc: Descriptive,
    pub sugar: Descriptive,
    pub acid: Descriptive,
}

impl BaseSummary {
    /// Summarize all three replicate series of a dataset entry
    pub fn of_entry(entry: &DatasetEntry) -> Result<Self, StatsError> {
        Ok(Self {
            vc: Descriptive::of(Metric::AscorbicAcid, entry.series(Metric::AscorbicAcid))?,
            sugar: Descriptive::of(Metric::Sugar, entry.series(Metric::Sugar))?,
            acid: Descriptive::of(Metric::Acid, entry.series(Metric::Acid))?,
        })
    }
}

/// Fully derived statistics for one (sampling time, group) pair.
///
/// The ratio fields are only ever computed from the sugar and acid summaries of the
/// same record; there is no way to set them independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    key: RecordKey,
    vc: Descriptive,
    sugar: Descriptive,
    acid: Descriptive,
    sugar_acid_ratio: Descriptive,
}

impl SummaryRecord {
    /// Derive the sugar/acid ratio and build the record
    pub fn derive(key: RecordKey, base: BaseSummary) -> Result<Self, StatsError> {
        let ratio = propagate_ratio(base.sugar, base.acid).map_err(|e| e.with_key(key.clone()))?;
        Ok(Self {
            key,
            vc: base.vc,
            sugar: base.sugar,
            acid: base.acid,
            sugar_acid_ratio: ratio,
        })
    }

    /// Summarize a dataset entry into a record
    pub fn from_entry(entry: &DatasetEntry) -> Result<Self, StatsError> {
        let key = RecordKey::new(entry.time, entry.group.clone());
        let base = BaseSummary::of_entry(entry).map_err(|e| e.with_key(key.clone()))?;
        Self::derive(key, base)
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn time(&self) -> SamplingTime {
        self.key.time
    }

    pub fn group(&self) -> &Group {
        &self.key.group
    }

    /// Ascorbic acid (vitamin C) summary
    pub fn vc(&self) -> Descriptive {
        self.vc
    }

    pub fn sugar(&self) -> Descriptive {
        self.sugar
    }

    pub fn acid(&self) -> Descriptive {
        self.acid
    }

    /// Sugar/acid ratio with propagated uncertainty
    pub fn ratio(&self) -> Descriptive {
        self.sugar_acid_ratio
    }

    /// The summary for one base metric
    pub fn metric(&self, metric: Metric) -> Descriptive {
        match metric {
            Metric::AscorbicAcid => self.vc,
            Metric::Sugar => self.sugar,
            Metric::Acid => self.acid,
        }
    }
}

/// Ratio of mean sugar to mean acid with first-order uncertainty propagation.
///
/// Relative errors of the (assumed uncorrelated) sugar and acid measurements are
/// combined in quadrature:
///
/// ```text
/// ratio_std = ratio * sqrt((sugar_std / sugar_mean)^2 + (acid_std / acid_mean)^2)
/// ```
///
/// A zero sugar mean makes the relative form 0 * inf; the absolute form
/// `sugar_std / |acid_mean|` is used instead, which is the same expression evaluated
/// at `sugar_mean = 0`.
pub fn propagate_ratio(sugar: Descriptive, acid: Descriptive) -> Result<Descriptive, StatsError> {
    if acid.mean == 0.0 {
        return Err(StatsError::DivisionByZero { key: None });
    }

    let ratio = sugar.mean / acid.mean;
    let ratio_std = if sugar.mean == 0.0 {
        sugar.std / acid.mean.abs()
    } else {
        ratio.abs()
            * ((sugar.std / sugar.mean).powi(2) + (acid.std / acid.mean).powi(2)).sqrt()
    };

    Ok(Descriptive::new(ratio, ratio_std))
}
