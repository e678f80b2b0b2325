use std::path::Path;

use super::geometry::{
    dash_segments, format_tick, legend_box_size, place_box, rounded_rect, stack_below,
    LegendMetrics, LegendSpacing,
};
use super::*;
use crate::dataset::{Dataset, DatasetEntry, Group, SamplingTime};
use crate::encoding::{HexColor, MarkerShape, VisualEncoding};
use crate::stats::{SummaryRecord, SummaryTable};

fn reference_layout() -> ChartLayout {
    let table = SummaryTable::from_dataset(&Dataset::reference()).unwrap();
    ChartLayout::build(&table, &VisualEncoding::reference(), &ChartStyle::default()).unwrap()
}

fn flat_entry(time: SamplingTime, group: &str, vc: f64) -> DatasetEntry {
    DatasetEntry::new(time, group, vec![vc; 5], vec![2.0; 5], vec![0.8; 5])
}

#[test]
fn test_reference_layout_counts() {
    let layout = reference_layout();
    assert_eq!(layout.markers.len(), 8);
    assert_eq!(layout.error_bars.len(), 8);
    assert_eq!(layout.trends.len(), 4);
}

#[test]
fn test_marker_position_and_style() {
    let layout = reference_layout();
    let marker = &layout.markers[0];

    assert_eq!(marker.key.time, SamplingTime::Early);
    assert_eq!(marker.key.group, Group::new("CK1"));
    assert!((marker.x - 2.256_171_07).abs() < 1e-6);
    assert!((marker.y - 14.038).abs() < 1e-9);
    assert_eq!(marker.color, HexColor::new(0x1f, 0x77, 0xb4));
    assert_eq!(marker.shape, MarkerShape::Circle);
    assert_eq!(marker.area, 150.0);

    let late: Vec<_> = layout
        .markers
        .iter()
        .filter(|m| m.key.time == SamplingTime::Late)
        .collect();
    assert_eq!(late.len(), 4);
    assert!(late
        .iter()
        .all(|m| m.shape == MarkerShape::Square && m.area == 120.0));
}

#[test]
fn test_error_bars_are_one_std_around_marker() {
    let layout = reference_layout();
    let bar = &layout.error_bars[0];

    assert!((bar.y_extent.0 - (14.038 - 0.343_243_353_905_068)).abs() < 1e-9);
    assert!((bar.y_extent.1 - (14.038 + 0.343_243_353_905_068)).abs() < 1e-9);
    assert!((bar.x_span() - 2.0 * 0.065_126_63).abs() < 1e-6);
    assert_eq!(bar.center, (layout.markers[0].x, layout.markers[0].y));
}

#[test]
fn test_trends_connect_early_to_late() {
    let layout = reference_layout();

    for trend in &layout.trends {
        let early = layout
            .markers
            .iter()
            .find(|m| m.key.group == trend.group && m.key.time == SamplingTime::Early)
            .unwrap();
        let late = layout
            .markers
            .iter()
            .find(|m| m.key.group == trend.group && m.key.time == SamplingTime::Late)
            .unwrap();
        assert_eq!(trend.from, (early.x, early.y));
        assert_eq!(trend.to, (late.x, late.y));
        assert_eq!(trend.color, early.color);
    }
}

#[test]
fn test_axis_ranges_contain_all_error_bars() {
    let layout = reference_layout();

    for bar in &layout.error_bars {
        assert!(layout.x_range.0 < bar.x_extent.0);
        assert!(layout.x_range.1 > bar.x_extent.1);
        assert!(layout.y_range.0 < bar.y_extent.0);
        assert!(layout.y_range.1 > bar.y_extent.1);
    }
}

#[test]
fn test_opacity_hierarchy() {
    assert!(MARKER_OPACITY > ERROR_BAR_OPACITY);
    assert!(ERROR_BAR_OPACITY > TREND_OPACITY);
    assert!(TREND_OPACITY > 0.0);
}

#[test]
fn test_both_legends_present() {
    let layout = reference_layout();

    assert_eq!(layout.time_legend.title, "Month");
    let labels: Vec<_> = layout
        .time_legend
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, ["Jan", "Apr"]);
    assert_eq!(layout.time_legend.entries[0].shape, MarkerShape::Circle);
    assert_eq!(layout.time_legend.entries[1].shape, MarkerShape::Square);

    assert_eq!(layout.group_legend.title, "Treatment");
    let groups: Vec<_> = layout
        .group_legend
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(groups, ["CK1", "CK2", "TK", "TC"]);
    assert_eq!(layout.group_legend.placement, LegendPlacement::LowerRight);

    assert_eq!(layout.annotation.text, "High Quality: High VC + High S/A Ratio");
}

#[test]
fn test_unknown_group_is_configuration_mismatch() {
    let dataset = Dataset::new(vec![
        flat_entry(SamplingTime::Early, "XX", 10.0),
        flat_entry(SamplingTime::Late, "XX", 12.0),
    ])
    .unwrap();
    let table = SummaryTable::from_dataset(&dataset).unwrap();

    let err = ChartLayout::build(&table, &VisualEncoding::reference(), &ChartStyle::default())
        .unwrap_err();
    assert!(err.is_configuration_mismatch());
    assert!(err.to_string().contains("XX"));
}

#[test]
fn test_identical_replicates_give_zero_length_bars() {
    let dataset = Dataset::new(vec![
        flat_entry(SamplingTime::Early, "CK1", 10.0),
        flat_entry(SamplingTime::Late, "CK1", 12.0),
    ])
    .unwrap();
    let table = SummaryTable::from_dataset(&dataset).unwrap();
    let layout =
        ChartLayout::build(&table, &VisualEncoding::reference(), &ChartStyle::default()).unwrap();

    assert_eq!(layout.markers.len(), 2);
    for bar in &layout.error_bars {
        assert_eq!(bar.x_span(), 0.0);
        assert_eq!(bar.y_span(), 0.0);
    }
    assert_eq!(layout.group_legend.entries.len(), 1);
}

#[test]
fn test_single_sampling_time_has_no_trend() {
    let record = SummaryRecord::from_entry(&flat_entry(SamplingTime::Early, "TK", 9.0)).unwrap();
    let table = SummaryTable::from_records(vec![record]);
    let layout =
        ChartLayout::build(&table, &VisualEncoding::reference(), &ChartStyle::default()).unwrap();

    assert_eq!(layout.markers.len(), 1);
    assert!(layout.trends.is_empty());
    assert_eq!(layout.time_legend.entries.len(), 1);
    // Degenerate extents still produce a usable axis
    assert!(layout.x_range.1 > layout.x_range.0);
    assert!(layout.y_range.1 > layout.y_range.0);
}

#[test]
fn test_empty_table_has_nothing_to_plot() {
    let table = SummaryTable::from_records(Vec::new());
    let err = ChartLayout::build(&table, &VisualEncoding::reference(), &ChartStyle::default())
        .unwrap_err();
    assert!(matches!(err, ChartError::NoData));
}

#[test]
fn test_padded_range() {
    let (lo, hi) = padded_range([1.0, 3.0], 0.05);
    assert!((lo - 0.9).abs() < 1e-12);
    assert!((hi - 3.1).abs() < 1e-12);

    assert_eq!(padded_range([2.0, 2.0], 0.05), (1.5, 2.5));
    assert_eq!(padded_range(std::iter::empty(), 0.05), (0.0, 1.0));
    assert_eq!(padded_range([f64::NAN, 4.0], 0.0), (3.5, 4.5));
}

#[test]
fn test_dash_segments() {
    let segments = dash_segments((0.0, 0.0), (10.0, 0.0), 2.0, 1.0);
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0], ((0.0, 0.0), (2.0, 0.0)));
    assert_eq!(segments[1], ((3.0, 0.0), (5.0, 0.0)));
    // Last dash is clipped at the end point
    assert_eq!(segments[3], ((9.0, 0.0), (10.0, 0.0)));

    assert!(dash_segments((1.0, 1.0), (1.0, 1.0), 2.0, 1.0).is_empty());
}

#[test]
fn test_rounded_rect_stays_inside() {
    let rect = PixelRect::new(0, 0, 100, 50);
    let points = rounded_rect(&rect, 10, 4);

    assert_eq!(points.len(), 4 * 5);
    assert_eq!(points[0], (0, 10));
    assert_eq!(points[4], (10, 0));
    assert!(points
        .iter()
        .all(|&(x, y)| (0..=100).contains(&x) && (0..=50).contains(&y)));

    // Radius larger than the box is clamped to half the shorter side
    let clamped = rounded_rect(&rect, 100, 4);
    assert_eq!(clamped[0], (0, 25));
}

#[test]
fn test_legend_placement() {
    let plot = PixelRect::new(100, 50, 1100, 750);

    let lower_right = place_box(LegendPlacement::LowerRight, &plot, (200, 100), 10);
    assert_eq!(lower_right, PixelRect::new(890, 640, 1090, 740));

    let upper_left = place_box(
        LegendPlacement::UpperLeft {
            x_frac: 0.02,
            y_frac: 0.99,
        },
        &plot,
        (200, 100),
        10,
    );
    assert_eq!(upper_left, PixelRect::new(120, 57, 320, 157));
    assert!(!upper_left.intersects(&lower_right));
}

#[test]
fn test_annotation_stacks_below_legend() {
    let legend = PixelRect::new(120, 57, 320, 157);
    assert_eq!(stack_below(100, Some(&legend), 8), 165);
    assert_eq!(stack_below(200, Some(&legend), 8), 200);
    assert_eq!(stack_below(100, None, 8), 100);
}

#[test]
fn test_legend_box_size() {
    let metrics = LegendMetrics {
        title: (60, 20),
        entries: vec![(30, 18), (40, 18)],
    };
    let spacing = LegendSpacing {
        pad: 5,
        swatch: 20,
        label_gap: 6,
        label_inset: 3,
        row_gap: 4,
    };
    assert_eq!(legend_box_size(&metrics, &spacing), (79, 82));
}

#[test]
fn test_legend_labels_clear_the_swatch() {
    let spacing = LegendSpacing {
        pad: 5,
        swatch: 20,
        label_gap: 6,
        label_inset: 3,
        row_gap: 4,
    };
    let metrics = LegendMetrics {
        title: (10, 20),
        entries: vec![(30, 18)],
    };
    let rect = PixelRect::from_origin(100, 0, legend_box_size(&metrics, &spacing).0, 60);

    let label_left = spacing.label_x(rect.left);
    assert_eq!(label_left, 134);
    // Inset keeps the first glyph off the swatch and inside the frame
    assert!(label_left > rect.left + spacing.pad + spacing.swatch + spacing.label_gap);
    assert_eq!(label_left + 30 + spacing.pad, rect.right);

    let style = ChartStyle::default();
    assert!(style.px(0.15 * style.legend_font_pt) >= 1);
}

#[test]
fn test_format_tick() {
    assert_eq!(format_tick(2.0), "2");
    assert_eq!(format_tick(2.5), "2.5");
    assert_eq!(format_tick(2.256), "2.26");
    assert_eq!(format_tick(10.0), "10");
    assert_eq!(format_tick(-0.001), "0");
}

#[test]
fn test_style_point_conversion() {
    let style = ChartStyle::default();
    assert_eq!(style.px(72.0), 100);
    assert_eq!(style.px(18.0), 25);
    assert_eq!(style.px_u32(0.1), 1);
}

#[test]
fn test_output_format_from_path() {
    assert_eq!(
        OutputFormat::from_path(Path::new("chart.PNG")).unwrap(),
        OutputFormat::Png
    );
    assert_eq!(
        OutputFormat::from_path(Path::new("out/chart.svg")).unwrap(),
        OutputFormat::Svg
    );
    assert!(matches!(
        OutputFormat::from_path(Path::new("chart.jpg")),
        Err(ChartError::RenderTarget { .. })
    ));
    assert!(OutputFormat::from_path(Path::new("chart")).is_err());
}

#[test]
fn test_unknown_font_family_falls_back_to_sans_serif() {
    match resolve_font_family("NoSuchFontFamilyXYZ") {
        Ok(family) => assert_eq!(family, FALLBACK_FONT_FAMILY),
        Err(ChartError::FontUnavailable {
            requested,
            fallback,
        }) => {
            // Host without any font at all
            assert_eq!(requested, "NoSuchFontFamilyXYZ");
            assert_eq!(fallback, FALLBACK_FONT_FAMILY);
        }
        Err(e) => panic!("unexpected error: {}", e),
    }
}

#[test]
fn test_generic_font_family_resolves_to_itself() {
    if let Ok(family) = resolve_font_family(FALLBACK_FONT_FAMILY) {
        assert_eq!(family, FALLBACK_FONT_FAMILY);
    }
}
