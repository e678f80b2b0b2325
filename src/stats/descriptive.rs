use serde::{Deserialize, Serialize};

use crate::dataset::Metric;

use super::StatsError;

/// Mean and population standard deviation of a replicate series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Descriptive {
    pub mean: f64,
    pub std: f64,
}

impl Descriptive {
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Summarize the replicate values of one metric
    pub fn of(metric: Metric, values: &[f64]) -> Result<Self, StatsError> {
        match (mean(values), population_std(values)) {
            (Some(mean), Some(std)) => Ok(Self { mean, std }),
            _ => Err(StatsError::EmptySeries { metric, key: None }),
        }
    }

    /// Lower end of the ±1 std interval
    pub fn lower(&self) -> f64 {
        self.mean - self.std
    }

    /// Upper end of the ±1 std interval
    pub fn upper(&self) -> f64 {
        self.mean + self.std
    }
}

/// Arithmetic mean, `None` for an empty series.
///
/// A constant series returns its value exactly, without summation rounding.
pub fn mean(values: &[f64]) -> Option<f64> {
    let first = *values.first()?;
    if is_constant(values) {
        return Some(first);
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (N divisor), `None` for an empty series.
///
/// Exactly zero for a constant series.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    if is_constant(values) {
        return Some(0.0);
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / values.len() as f64).sqrt())
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
