//! Pixel-space helpers shared by the renderer: dash patterns, rounded boxes and
//! legend/annotation placement.

use std::f64::consts::FRAC_PI_2;

/// Axis-aligned rectangle in backend pixels (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle of the given size with its upper-left corner at `(left, top)`
    pub fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Where a legend box sits inside the plotting area
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPlacement {
    /// Upper-left corner at axes fractions (0 = left/bottom, 1 = right/top)
    UpperLeft { x_frac: f64, y_frac: f64 },
    /// Lower-right corner, inset from the plotting area edges
    LowerRight,
}

/// Pixel position of an axes-fraction anchor
pub fn axes_point(plot: &PixelRect, x_frac: f64, y_frac: f64) -> (i32, i32) {
    let x = plot.left as f64 + x_frac * plot.width() as f64;
    let y = plot.top as f64 + (1.0 - y_frac) * plot.height() as f64;
    (x.round() as i32, y.round() as i32)
}

/// Position a box of `size` inside the plotting area
pub fn place_box(
    placement: LegendPlacement,
    plot: &PixelRect,
    size: (i32, i32),
    inset: i32,
) -> PixelRect {
    match placement {
        LegendPlacement::UpperLeft { x_frac, y_frac } => {
            let (left, top) = axes_point(plot, x_frac, y_frac);
            PixelRect::from_origin(left, top, size.0, size.1)
        }
        LegendPlacement::LowerRight => {
            let right = plot.right - inset;
            let bottom = plot.bottom - inset;
            PixelRect::new(right - size.0, bottom - size.1, right, bottom)
        }
    }
}

/// Top edge for a box anchored at `anchor_top` that must clear the box `above`
pub fn stack_below(anchor_top: i32, above: Option<&PixelRect>, gap: i32) -> i32 {
    match above {
        Some(rect) => anchor_top.max(rect.bottom + gap),
        None => anchor_top,
    }
}

/// Text extents of a legend, as measured by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendMetrics {
    pub title: (u32, u32),
    pub entries: Vec<(u32, u32)>,
}

/// Spacing of a legend box, all in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSpacing {
    /// Inner padding of the frame
    pub pad: i32,
    /// Edge length reserved for an entry swatch
    pub swatch: i32,
    /// Gap between swatch and label
    pub label_gap: i32,
    /// Extra clearance before the label for glyphs with a negative left bearing
    pub label_inset: i32,
    /// Vertical gap between rows
    pub row_gap: i32,
}

impl LegendSpacing {
    pub fn row_height(&self, text_height: u32) -> i32 {
        (text_height as i32).max(self.swatch)
    }

    /// Left edge of an entry label in a legend box starting at `left`
    pub fn label_x(&self, left: i32) -> i32 {
        left + self.pad + self.swatch + self.label_gap + self.label_inset
    }
}

/// Outer size of a legend box
pub fn legend_box_size(metrics: &LegendMetrics, spacing: &LegendSpacing) -> (i32, i32) {
    let widest_entry = metrics
        .entries
        .iter()
        .map(|(w, _)| *w as i32)
        .max()
        .unwrap_or(0);
    let entry_width = spacing.swatch + spacing.label_gap + spacing.label_inset + widest_entry;
    let width = 2 * spacing.pad + entry_width.max(metrics.title.0 as i32);

    let rows: i32 = metrics
        .entries
        .iter()
        .map(|(_, h)| spacing.row_height(*h) + spacing.row_gap)
        .sum();
    let height = 2 * spacing.pad + metrics.title.1 as i32 + spacing.row_gap + rows;

    (width, height)
}

/// Split a straight line into dash segments.
///
/// The pattern starts with a dash; the final dash is clipped at `to`.
pub fn dash_segments(
    from: (f64, f64),
    to: (f64, f64),
    dash: f64,
    gap: f64,
) -> Vec<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length == 0.0 || dash <= 0.0 {
        return Vec::new();
    }

    let (ux, uy) = (dx / length, dy / length);
    let at = |t: f64| (from.0 + ux * t, from.1 + uy * t);

    let mut segments = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        segments.push((at(start), at(end)));
        start = end + gap.max(0.0);
    }
    segments
}

/// Closed outline of a rectangle with rounded corners.
///
/// Each corner is approximated by `steps` straight segments; the radius is clamped
/// to half the shorter side.
pub fn rounded_rect(rect: &PixelRect, radius: i32, steps: usize) -> Vec<(i32, i32)> {
    let r = radius.min(rect.width() / 2).min(rect.height() / 2).max(0) as f64;
    let steps = steps.max(1);

    // Corner centers, clockwise from top-left (screen coordinates)
    let corners = [
        (rect.left as f64 + r, rect.top as f64 + r, 2.0 * FRAC_PI_2),
        (rect.right as f64 - r, rect.top as f64 + r, 3.0 * FRAC_PI_2),
        (rect.right as f64 - r, rect.bottom as f64 - r, 0.0),
        (rect.left as f64 + r, rect.bottom as f64 - r, FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (steps + 1));
    for (cx, cy, start_angle) in corners {
        for i in 0..=steps {
            let angle = start_angle + FRAC_PI_2 * i as f64 / steps as f64;
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            points.push((x.round() as i32, y.round() as i32));
        }
    }
    points
}

/// Vertices of a marker glyph centered on `center`
pub fn triangle_points(center: (i32, i32), half: i32) -> Vec<(i32, i32)> {
    let (cx, cy) = center;
    vec![(cx, cy - half), (cx + half, cy + half), (cx - half, cy + half)]
}

pub fn diamond_points(center: (i32, i32), half: i32) -> Vec<(i32, i32)> {
    let (cx, cy) = center;
    vec![(cx, cy - half), (cx + half, cy), (cx, cy + half), (cx - half, cy)]
}

/// Tick label with at most two decimals and no trailing zeros
pub fn format_tick(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
