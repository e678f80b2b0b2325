use crate::dataset::Metric;

use super::RecordKey;

/// Errors raised while summarizing measurement series
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// A replicate series has no values, so neither mean nor deviation exists
    #[error("Empty {metric} series{}", key_suffix(.key))]
    EmptySeries {
        metric: Metric,
        key: Option<RecordKey>,
    },

    /// Mean acid concentration is exactly zero, so the sugar/acid ratio is undefined
    #[error("Division by zero: acid mean is 0{}", key_suffix(.key))]
    DivisionByZero { key: Option<RecordKey> },
}

impl StatsError {
    /// Attach the record key the failing series belongs to
    pub fn with_key(self, record: RecordKey) -> Self {
        match self {
            StatsError::EmptySeries { metric, .. } => StatsError::EmptySeries {
                metric,
                key: Some(record),
            },
            StatsError::DivisionByZero { .. } => StatsError::DivisionByZero { key: Some(record) },
        }
    }

    /// Record key of the failing series, if known
    pub fn key(&self) -> Option<&RecordKey> {
        match self {
            StatsError::EmptySeries { key, .. } | StatsError::DivisionByZero { key } => {
                key.as_ref()
            }
        }
    }
}

fn key_suffix(key: &Option<RecordKey>) -> String {
    match key {
        Some(key) => format!(" for {key}"),
        None => String::new(),
    }
}
