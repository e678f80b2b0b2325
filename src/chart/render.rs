//! Drawing of a [`ChartLayout`] onto any `plotters` backend.
//!
//! Draw order is back to front: axes, grid, trends, error bars, markers, legends,
//! annotation. Everything except the axes is drawn in backend pixels so dashes,
//! caps and legend boxes keep a fixed size regardless of the data ranges.

use plotters::coord::ranged1d::Ranged;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::encoding::MarkerShape;

use super::geometry::{
    axes_point, dash_segments, diamond_points, format_tick, legend_box_size, place_box,
    rounded_rect, stack_below, triangle_points, LegendMetrics, LegendSpacing, PixelRect,
};
use super::layout::{ChartLayout, LegendLayout};
use super::style::{
    ChartStyle, ANNOTATION_BOX_COLOR, ANNOTATION_BOX_OPACITY, ERROR_BAR_OPACITY, GRID_COLOR,
    GRID_OPACITY, LEGEND_EDGE_COLOR, LEGEND_FRAME_OPACITY, MARKER_OPACITY, TREND_OPACITY,
};

pub(crate) type DrawResult<T, DB> =
    Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

const TICK_COUNT: usize = 8;
const CORNER_STEPS: usize = 6;

/// Pixel boxes of the drawn furniture
#[derive(Debug, Clone, Copy)]
pub(crate) struct FigureMetrics {
    pub plot: PixelRect,
    pub time_legend: PixelRect,
    pub group_legend: PixelRect,
    pub annotation: PixelRect,
}

pub(crate) fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    style: &ChartStyle,
    font_family: &str,
) -> DrawResult<FigureMetrics, DB> {
    root.fill(&WHITE)?;

    let tick_font = (font_family, style.px(style.tick_font_pt) as f64).into_font();
    let label_font = (font_family, style.px(style.label_font_pt) as f64).into_font();

    let (x0, x1) = layout.x_range;
    let (y0, y1) = layout.y_range;

    let mut chart = ChartBuilder::on(root)
        .margin(style.px(12.0))
        .x_label_area_size(style.px(50.0))
        .y_label_area_size(style.px(64.0))
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(TICK_COUNT)
        .y_labels(TICK_COUNT)
        .x_label_formatter(&|v| format_tick(*v))
        .y_label_formatter(&|v| format_tick(*v))
        .label_style(tick_font)
        .axis_desc_style(label_font)
        .x_desc(layout.x_label.as_str())
        .y_desc(layout.y_label.as_str())
        .draw()?;

    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
    let plot = PixelRect::new(x_pixels.start, y_pixels.start, x_pixels.end, y_pixels.end);

    let line_px = style.px_u32(style.line_width_pt);
    let dash = style.px(3.7 * style.line_width_pt) as f64;
    let gap = style.px(1.6 * style.line_width_pt) as f64;

    // Grid
    let grid_style = RGBColor::from(GRID_COLOR).mix(GRID_OPACITY).stroke_width(1);
    let x_ticks = chart.as_coord_spec().x_spec().key_points(TICK_COUNT);
    let y_ticks = chart.as_coord_spec().y_spec().key_points(TICK_COUNT);
    for x in x_ticks {
        let from = chart.backend_coord(&(x, y0));
        let to = chart.backend_coord(&(x, y1));
        draw_dashed(root, from, to, dash, gap, grid_style)?;
    }
    for y in y_ticks {
        let from = chart.backend_coord(&(x0, y));
        let to = chart.backend_coord(&(x1, y));
        draw_dashed(root, from, to, dash, gap, grid_style)?;
    }

    // Trends
    for trend in &layout.trends {
        let trend_style = RGBColor::from(trend.color)
            .mix(TREND_OPACITY)
            .stroke_width(line_px);
        let from = chart.backend_coord(&trend.from);
        let to = chart.backend_coord(&trend.to);
        draw_dashed(root, from, to, dash, gap, trend_style)?;
    }

    // Error bars
    let cap = style.px(style.cap_size_pt);
    for bar in &layout.error_bars {
        let bar_style = RGBColor::from(bar.color)
            .mix(ERROR_BAR_OPACITY)
            .stroke_width(line_px);
        let (cx, cy) = bar.center;

        if bar.x_span() > 0.0 {
            let left = chart.backend_coord(&(bar.x_extent.0, cy));
            let right = chart.backend_coord(&(bar.x_extent.1, cy));
            root.draw(&PathElement::new(vec![left, right], bar_style))?;
            for end in [left, right] {
                root.draw(&PathElement::new(
                    vec![(end.0, end.1 - cap), (end.0, end.1 + cap)],
                    bar_style,
                ))?;
            }
        }

        if bar.y_span() > 0.0 {
            let bottom = chart.backend_coord(&(cx, bar.y_extent.0));
            let top = chart.backend_coord(&(cx, bar.y_extent.1));
            root.draw(&PathElement::new(vec![bottom, top], bar_style))?;
            for end in [bottom, top] {
                root.draw(&PathElement::new(
                    vec![(end.0 - cap, end.1), (end.0 + cap, end.1)],
                    bar_style,
                ))?;
            }
        }
    }

    // Markers
    let edge_style = BLACK.mix(MARKER_OPACITY).stroke_width(style.px_u32(1.0));
    for marker in &layout.markers {
        let center = chart.backend_coord(&(marker.x, marker.y));
        let half = style.px(marker.area.sqrt() / 2.0).max(1);
        let fill = RGBColor::from(marker.color).mix(MARKER_OPACITY).filled();
        draw_marker(root, marker.shape, center, half, fill, Some(edge_style))?;
    }

    // Both legends are drawn independently; the second never evicts the first
    let time_legend = draw_legend(root, &layout.time_legend, &plot, style, font_family)?;
    let group_legend = draw_legend(root, &layout.group_legend, &plot, style, font_family)?;

    let annotation = draw_annotation(root, layout, &plot, &time_legend, style, font_family)?;

    Ok(FigureMetrics {
        plot,
        time_legend,
        group_legend,
        annotation,
    })
}

fn draw_dashed<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    from: (i32, i32),
    to: (i32, i32),
    dash: f64,
    gap: f64,
    style: ShapeStyle,
) -> DrawResult<(), DB> {
    let from = (from.0 as f64, from.1 as f64);
    let to = (to.0 as f64, to.1 as f64);
    for (a, b) in dash_segments(from, to, dash, gap) {
        root.draw(&PathElement::new(vec![round(a), round(b)], style))?;
    }
    Ok(())
}

fn round(point: (f64, f64)) -> (i32, i32) {
    (point.0.round() as i32, point.1.round() as i32)
}

fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    shape: MarkerShape,
    center: (i32, i32),
    half: i32,
    fill: ShapeStyle,
    edge: Option<ShapeStyle>,
) -> DrawResult<(), DB> {
    let (cx, cy) = center;
    match shape {
        MarkerShape::Circle => {
            root.draw(&Circle::new(center, half as u32, fill))?;
            if let Some(edge) = edge {
                root.draw(&Circle::new(center, half as u32, edge))?;
            }
        }
        MarkerShape::Square => {
            let corners = [(cx - half, cy - half), (cx + half, cy + half)];
            root.draw(&Rectangle::new(corners, fill))?;
            if let Some(edge) = edge {
                root.draw(&Rectangle::new(corners, edge))?;
            }
        }
        MarkerShape::Triangle | MarkerShape::Diamond => {
            let points = if shape == MarkerShape::Triangle {
                triangle_points(center, half)
            } else {
                diamond_points(center, half)
            };
            root.draw(&Polygon::new(points.clone(), fill))?;
            if let Some(edge) = edge {
                let mut outline = points;
                outline.push(outline[0]);
                root.draw(&PathElement::new(outline, edge))?;
            }
        }
    }
    Ok(())
}

fn draw_rounded_box<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    rect: &PixelRect,
    radius: i32,
    fill: ShapeStyle,
    edge: Option<ShapeStyle>,
) -> DrawResult<(), DB> {
    let outline = rounded_rect(rect, radius, CORNER_STEPS);
    root.draw(&Polygon::new(outline.clone(), fill))?;
    if let Some(edge) = edge {
        let mut closed = outline;
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        root.draw(&PathElement::new(closed, edge))?;
    }
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    legend: &LegendLayout,
    plot: &PixelRect,
    style: &ChartStyle,
    font_family: &str,
) -> DrawResult<PixelRect, DB> {
    let title_font = (font_family, style.px(style.legend_title_pt) as f64)
        .into_font()
        .color(&BLACK);
    let entry_font = (font_family, style.px(style.legend_font_pt) as f64)
        .into_font()
        .color(&BLACK);

    let metrics = LegendMetrics {
        title: root.estimate_text_size(&legend.title, &title_font)?,
        entries: legend
            .entries
            .iter()
            .map(|e| root.estimate_text_size(&e.label, &entry_font))
            .collect::<Result<Vec<_>, _>>()?,
    };
    let spacing = LegendSpacing {
        pad: style.px(0.4 * style.legend_font_pt),
        swatch: style.px(10.0),
        label_gap: style.px(0.8 * style.legend_font_pt),
        label_inset: style.px(0.15 * style.legend_font_pt),
        row_gap: style.px(0.5 * style.legend_font_pt),
    };

    let size = legend_box_size(&metrics, &spacing);
    let rect = place_box(
        legend.placement,
        plot,
        size,
        style.px(0.5 * style.legend_font_pt),
    );

    draw_rounded_box(
        root,
        &rect,
        spacing.pad / 2,
        WHITE.mix(LEGEND_FRAME_OPACITY).filled(),
        Some(RGBColor::from(LEGEND_EDGE_COLOR).stroke_width(1)),
    )?;

    let title_x = rect.left + (rect.width() - metrics.title.0 as i32) / 2;
    let mut y = rect.top + spacing.pad;
    root.draw(&Text::new(legend.title.clone(), (title_x, y), title_font))?;
    y += metrics.title.1 as i32 + spacing.row_gap;

    for (entry, (_, text_height)) in legend.entries.iter().zip(&metrics.entries) {
        let row_height = spacing.row_height(*text_height);
        let swatch_center = (rect.left + spacing.pad + spacing.swatch / 2, y + row_height / 2);
        draw_marker(
            root,
            entry.shape,
            swatch_center,
            spacing.swatch / 2,
            RGBColor::from(entry.color).filled(),
            None,
        )?;

        let label_pos = (
            spacing.label_x(rect.left),
            y + (row_height - *text_height as i32) / 2,
        );
        root.draw(&Text::new(entry.label.clone(), label_pos, entry_font.clone()))?;
        y += row_height + spacing.row_gap;
    }

    Ok(rect)
}

fn draw_annotation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    plot: &PixelRect,
    time_legend: &PixelRect,
    style: &ChartStyle,
    font_family: &str,
) -> DrawResult<PixelRect, DB> {
    let annotation = &layout.annotation;
    let font = (font_family, style.px(style.annotation_font_pt) as f64)
        .into_font()
        .color(&BLACK);
    let (text_width, text_height) = root.estimate_text_size(&annotation.text, &font)?;
    let pad = style.px(0.3 * style.annotation_font_pt);

    let (left, anchor_top) = axes_point(plot, annotation.anchor.0, annotation.anchor.1);
    let top = stack_below(anchor_top, Some(time_legend), style.px(4.0));
    let rect = PixelRect::from_origin(
        left,
        top,
        text_width as i32 + 2 * pad,
        text_height as i32 + 2 * pad,
    );

    draw_rounded_box(
        root,
        &rect,
        pad,
        RGBColor::from(ANNOTATION_BOX_COLOR)
            .mix(ANNOTATION_BOX_OPACITY)
            .filled(),
        None,
    )?;
    root.draw(&Text::new(
        annotation.text.clone(),
        (left + pad, top + pad),
        font,
    ))?;

    Ok(rect)
}
