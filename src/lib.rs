//! # qualplot - Fruit Quality Scatter Charts
//!
//! `qualplot` turns replicate measurements from a fruit treatment trial into a single
//! annotated chart: sugar–acid ratio on the x axis, ascorbic acid (vitamin C) on the
//! y axis, one marker per treatment group and sampling time.
//!
//! ## Pipeline
//!
//! 1. **Dataset**: raw replicate series per (sampling time, group, metric). The
//!    reference trial ships with the crate, other trials load from TOML.
//!
//! 2. **Statistics**: mean and *population* standard deviation per series, plus the
//!    sugar/acid ratio with its uncertainty propagated in quadrature.
//!
//! 3. **Encoding**: the fixed visual mapping of groups to colors and sampling times to
//!    marker shapes.
//!
//! 4. **Chart**: a pure layout pass computes every marker, error bar, trend segment,
//!    legend and annotation, then `plotters` draws it to PNG or SVG.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qualplot::chart::{render_to_file, ChartStyle};
//! use qualplot::dataset::Dataset;
//! use qualplot::encoding::VisualEncoding;
//! use qualplot::stats::SummaryTable;
//!
//! let table = SummaryTable::from_dataset(&Dataset::reference())?;
//! let stats = render_to_file(
//!     "sugar_acid_vc.png",
//!     &table,
//!     &VisualEncoding::reference(),
//!     &ChartStyle::default(),
//! )?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`dataset`]: typed raw input and the reference trial
//! - [`stats`]: summary records and the summary table
//! - [`encoding`]: group colors and sampling-time markers
//! - [`chart`]: layout and rendering

pub mod chart;
pub mod dataset;
pub mod encoding;
pub mod stats;

pub use chart::{render_to_file, ChartError, ChartLayout, ChartStyle, OutputFormat, RenderStats};
pub use dataset::{Dataset, DatasetEntry, DatasetError, Group, Metric, SamplingTime};
pub use encoding::{EncodingError, HexColor, MarkerShape, VisualEncoding};
pub use stats::{Descriptive, RecordKey, StatsError, SummaryRecord, SummaryTable};
