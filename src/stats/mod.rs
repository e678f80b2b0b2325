//! # Statistics Module
//!
//! Descriptive statistics for the replicate series of a [`Dataset`](crate::dataset::Dataset).
//!
//! ## Conventions
//!
//! - **Population standard deviation**: deviations are divided by N, not N-1. The
//!   chart reports the spread of the measured replicates themselves, and every error
//!   bar width depends on this choice.
//!
//! - **Ratio uncertainty**: the sugar/acid ratio uses first-order propagation with
//!   relative errors added in quadrature (see [`propagate_ratio`]).
//!
//! - **No partial results**: an empty series or a zero acid mean fails the whole
//!   summary with a [`StatsError`] naming the offending record.

mod descriptive;
mod error;
mod record;
mod report;
mod table;


pub use descriptive::{mean, population_std, Descriptive};
pub use error::StatsError;
pub use record::{propagate_ratio, BaseSummary, RecordKey, SummaryRecord};
pub use table::SummaryTable;
