use log::debug;

use crate::dataset::{Group, SamplingTime};
use crate::encoding::{HexColor, MarkerShape, VisualEncoding};
use crate::stats::{RecordKey, SummaryTable};

use super::geometry::LegendPlacement;
use super::style::{ChartStyle, LEGEND_SWATCH_GRAY};
use super::ChartError;

/// One scatter point at (ratio mean, VC mean)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    pub key: RecordKey,
    pub x: f64,
    pub y: f64,
    pub color: HexColor,
    pub shape: MarkerShape,
    /// Marker area in pt²
    pub area: f64,
}

/// ±1 standard deviation on both axes around a marker
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBarLayout {
    pub key: RecordKey,
    pub center: (f64, f64),
    /// Ratio interval (x)
    pub x_extent: (f64, f64),
    /// VC interval (y)
    pub y_extent: (f64, f64),
    pub color: HexColor,
}

impl ErrorBarLayout {
    pub fn x_span(&self) -> f64 {
        self.x_extent.1 - self.x_extent.0
    }

    pub fn y_span(&self) -> f64 {
        self.y_extent.1 - self.y_extent.0
    }
}

/// Dashed segment from a group's early point to its late point
#[derive(Debug, Clone, PartialEq)]
pub struct TrendLayout {
    pub group: Group,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub shape: MarkerShape,
    pub color: HexColor,
}

/// A titled legend box; each legend is drawn on its own and never replaces another
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub title: String,
    pub entries: Vec<LegendEntry>,
    pub placement: LegendPlacement,
}

/// Free-floating caption, top-left anchored at axes fractions
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationLayout {
    pub text: String,
    pub anchor: (f64, f64),
}

/// Everything the renderer draws, in data coordinates.
///
/// Built in a single forward pass over the summary table: sampling time by sampling
/// time, group by group.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_label: String,
    pub y_label: String,
    pub markers: Vec<MarkerLayout>,
    pub error_bars: Vec<ErrorBarLayout>,
    pub trends: Vec<TrendLayout>,
    pub time_legend: LegendLayout,
    pub group_legend: LegendLayout,
    pub annotation: AnnotationLayout,
}

impl ChartLayout {
    /// Map a summary table onto chart geometry.
    ///
    /// Fails with a configuration mismatch when a group or sampling time of the table
    /// has no visual encoding.
    pub fn build(
        table: &SummaryTable,
        encoding: &VisualEncoding,
        style: &ChartStyle,
    ) -> Result<Self, ChartError> {
        if table.is_empty() {
            return Err(ChartError::NoData);
        }
        encoding.validate()?;

        let mut markers = Vec::with_capacity(table.len());
        let mut error_bars = Vec::with_capacity(table.len());

        for time in table.times() {
            let time_style = encoding.time_style(time)?;
            for record in table.at(time) {
                let color = encoding.color_of(record.group())?;
                let ratio = record.ratio();
                let vc = record.vc();

                markers.push(MarkerLayout {
                    key: record.key().clone(),
                    x: ratio.mean,
                    y: vc.mean,
                    color,
                    shape: time_style.marker,
                    area: time_style.area,
                });
                error_bars.push(ErrorBarLayout {
                    key: record.key().clone(),
                    center: (ratio.mean, vc.mean),
                    x_extent: (ratio.lower(), ratio.upper()),
                    y_extent: (vc.lower(), vc.upper()),
                    color,
                });
            }
        }

        let groups = table.groups();
        let mut trends = Vec::with_capacity(groups.len());
        for group in &groups {
            let early = table.get(SamplingTime::Early, group);
            let late = table.get(SamplingTime::Late, group);
            if let (Some(early), Some(late)) = (early, late) {
                trends.push(TrendLayout {
                    group: group.clone(),
                    from: (early.ratio().mean, early.vc().mean),
                    to: (late.ratio().mean, late.vc().mean),
                    color: encoding.color_of(group)?,
                });
            } else {
                debug!("No trend for group {}: only one sampling time", group);
            }
        }

        let x_range = padded_range(
            error_bars.iter().flat_map(|b| [b.x_extent.0, b.x_extent.1]),
            style.axis_margin,
        );
        let y_range = padded_range(
            error_bars.iter().flat_map(|b| [b.y_extent.0, b.y_extent.1]),
            style.axis_margin,
        );

        let time_legend = LegendLayout {
            title: style.time_legend_title.clone(),
            entries: table
                .times()
                .into_iter()
                .map(|time| {
                    let ts = encoding.time_style(time)?;
                    Ok(LegendEntry {
                        label: ts.label.clone(),
                        shape: ts.marker,
                        color: LEGEND_SWATCH_GRAY,
                    })
                })
                .collect::<Result<Vec<_>, ChartError>>()?,
            placement: LegendPlacement::UpperLeft {
                x_frac: style.time_legend_anchor.0,
                y_frac: style.time_legend_anchor.1,
            },
        };

        // Encoding order, restricted to groups that actually have data
        let group_legend = LegendLayout {
            title: style.group_legend_title.clone(),
            entries: encoding
                .groups
                .iter()
                .filter(|g| groups.contains(&g.group))
                .map(|g| LegendEntry {
                    label: g.group.to_string(),
                    shape: MarkerShape::Circle,
                    color: g.color,
                })
                .collect(),
            placement: LegendPlacement::LowerRight,
        };

        debug!(
            "Layout: {} markers, {} trends, x {:?}, y {:?}",
            markers.len(),
            trends.len(),
            x_range,
            y_range
        );

        Ok(Self {
            x_range,
            y_range,
            x_label: style.x_label.clone(),
            y_label: style.y_label.clone(),
            markers,
            error_bars,
            trends,
            time_legend,
            group_legend,
            annotation: AnnotationLayout {
                text: style.annotation.clone(),
                anchor: style.annotation_anchor,
            },
        })
    }
}

/// Data extent widened by `margin` of the span on both sides.
///
/// A degenerate (single-valued) extent becomes a unit span around the value.
pub fn padded_range(values: impl IntoIterator<Item = f64>, margin: f64) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * margin, hi + span * margin)
}
