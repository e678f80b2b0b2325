use log::debug;
use serde::Serialize;

use crate::dataset::{Dataset, Group, SamplingTime};

use super::{StatsError, SummaryRecord};

/// Summary records of a whole dataset, in dataset order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    records: Vec<SummaryRecord>,
}

impl SummaryTable {
    /// Summarize every entry of a dataset.
    ///
    /// Fails on the first empty series or zero acid mean; there is no partial table.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, StatsError> {
        let records = dataset
            .entries()
            .iter()
            .map(SummaryRecord::from_entry)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Summarized {} records", records.len());
        Ok(Self { records })
    }

    /// Build a table from already derived records
    pub fn from_records(records: Vec<SummaryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for a group at a sampling time
    pub fn get(&self, time: SamplingTime, group: &Group) -> Option<&SummaryRecord> {
        self.records
            .iter()
            .find(|r| r.time() == time && r.group() == group)
    }

    /// Records of one sampling time
    pub fn at(&self, time: SamplingTime) -> impl Iterator<Item = &SummaryRecord> {
        self.records.iter().filter(move |r| r.time() == time)
    }

    /// Groups in order of first appearance
    pub fn groups(&self) -> Vec<Group> {
        let mut groups: Vec<Group> = Vec::new();
        for record in &self.records {
            if !groups.contains(record.group()) {
                groups.push(record.group().clone());
            }
        }
        groups
    }

    /// Sampling times present in the table, in chronological order
    pub fn times(&self) -> Vec<SamplingTime> {
        SamplingTime::ALL
            .into_iter()
            .filter(|t| self.records.iter().any(|r| r.time() == *t))
            .collect()
    }
}
