use gpui_column_chart::data_types::{ResetScaling, StackedBarConfig};
use gpui_column_chart::theme::ChartTheme;
use gpui_column_chart::scales::{scale_widths, stack_offsets};
use gpui_column_chart::{
    ItemHandle, LegendEvent, LegendEventKind, RowInput, SegmentInput, StackedBarChart,
    VisibilityController,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn row(width: f64, values: &[(&str, f64)]) -> RowInput {
    RowInput::new(
        width,
        values
            .iter()
            .map(|(series, value)| SegmentInput::new(*series, *value))
            .collect(),
    )
}

fn abc_chart() -> StackedBarChart {
    let rows = (0..3)
        .map(|_| row(100.0, &[("A", 10.0), ("B", 20.0), ("C", 30.0)]))
        .collect();
    StackedBarChart::new(rows).unwrap()
}

fn widths(chart: &StackedBarChart, row: usize) -> Vec<f64> {
    chart.rows()[row].segments().iter().map(|s| s.width()).collect()
}

fn event(kind: LegendEventKind, series: &str) -> LegendEvent {
    LegendEvent {
        kind,
        origin: ItemHandle(0),
        series_id: series.to_string(),
    }
}

#[test]
fn test_initial_layout_uses_row_totals() {
    let chart = abc_chart();
    for r in 0..3 {
        let w = widths(&chart, r);
        assert_close(w[0], 100.0 / 6.0);
        assert_close(w[1], 100.0 / 3.0);
        assert_close(w[2], 50.0);
        assert_close(chart.rows()[r].segments()[2].x_offset(), 50.0);
        assert_eq!(chart.rows()[r].sort_key(), 60.0);
    }
}

#[test]
fn test_hide_show_only_reset_scenario() {
    let mut chart = abc_chart();

    assert!(chart.handle(&event(LegendEventKind::HideBar, "B")));
    for r in 0..3 {
        let segments = chart.rows()[r].segments();
        assert_close(segments[0].width(), 25.0);
        assert!(!segments[1].visible());
        assert_eq!(segments[1].width(), 0.0);
        assert_close(segments[2].width(), 75.0);
        assert_close(segments[2].x_offset(), 25.0);
    }

    assert!(chart.handle(&event(LegendEventKind::ShowOnly, "C")));
    for r in 0..3 {
        let segments = chart.rows()[r].segments();
        assert!(!segments[0].visible() && !segments[1].visible());
        assert_eq!(segments[0].width(), 0.0);
        assert_eq!(segments[1].width(), 0.0);
        assert_close(segments[2].width(), 100.0);
        assert_eq!(segments[2].x_offset(), 0.0);
        assert_eq!(chart.rows()[r].sort_key(), 30.0);
    }

    assert!(chart.handle(&event(LegendEventKind::ResetAll, "C")));
    for r in 0..3 {
        let w = widths(&chart, r);
        assert_close(w[0], 100.0 / 6.0);
        assert_close(w[1], 100.0 / 3.0);
        assert_close(w[2], 50.0);
        assert_eq!(chart.rows()[r].exclusive(), None);
    }
}

#[test]
fn test_hide_uses_max_remaining_sum_across_rows() {
    let mut chart = StackedBarChart::new(vec![
        row(100.0, &[("A", 10.0), ("B", 50.0), ("C", 10.0)]),
        row(100.0, &[("A", 30.0), ("B", 5.0), ("C", 10.0)]),
    ])
    .unwrap();

    let maxima = chart.series_maxima("B", true);
    assert_eq!(maxima.get(""), Some(&40.0));

    VisibilityController::hide_bar(&mut chart, "B");
    assert_close(widths(&chart, 0)[0], 25.0);
    assert_close(widths(&chart, 0)[2], 25.0);
    assert_close(chart.rows()[0].visible_width(), 50.0);
    assert_close(chart.rows()[1].visible_width(), 100.0);
    assert_eq!(chart.rows()[0].reference_max(), 40.0);
}

#[test]
fn test_series_maxima_including_target() {
    let mut chart = abc_chart();
    VisibilityController::hide_bar(&mut chart, "A");
    VisibilityController::hide_bar(&mut chart, "B");

    let with_b = chart.series_maxima("B", false);
    assert_eq!(with_b.get(""), Some(&50.0));
    let without_b = chart.series_maxima("B", true);
    assert_eq!(without_b.get(""), Some(&30.0));

    VisibilityController::show_bar(&mut chart, "B");
    assert_close(widths(&chart, 0)[1], 40.0);
    assert_close(widths(&chart, 0)[2], 60.0);
    assert_close(chart.rows()[0].segments()[2].x_offset(), 40.0);
    assert_eq!(chart.rows()[0].segments()[0].width(), 0.0);
}

#[test]
fn test_show_bar_inverts_hide_bar() {
    let mut chart = StackedBarChart::new(vec![
        row(120.0, &[("A", 4.0), ("B", 9.0), ("C", 1.0)]),
        row(80.0, &[("A", 7.0), ("B", 2.0), ("C", 6.0)]),
        row(100.0, &[("A", 3.0), ("C", 3.0)]),
    ])
    .unwrap();
    // Bring the chart onto the shared-maximum layout hide/show work with.
    VisibilityController::show_bar(&mut chart, "A");
    let before = chart.state();

    VisibilityController::hide_bar(&mut chart, "B");
    assert!(chart.rows().iter().all(|r| r.segment_for(1).map_or(true, |s| !s.visible())));
    VisibilityController::show_bar(&mut chart, "B");

    let after = chart.state();
    for (b, a) in before.iter().zip(&after) {
        for (sb, sa) in b.segments.iter().zip(&a.segments) {
            assert_eq!(sb.visible, sa.visible);
            assert_close(sa.width, sb.width);
            assert_close(sa.x_offset, sb.x_offset);
        }
    }
}

#[test]
fn test_show_only_with_absent_series() {
    let mut chart = StackedBarChart::new(vec![
        row(100.0, &[("A", 5.0), ("B", 10.0)]),
        row(100.0, &[("A", 20.0)]),
        row(50.0, &[("B", 4.0), ("A", 1.0)]),
    ])
    .unwrap();

    assert!(VisibilityController::show_only(&mut chart, "B"));
    assert_eq!(chart.rows()[0].visible_count(), 1);
    assert_eq!(chart.rows()[1].visible_count(), 0);
    assert_eq!(chart.rows()[2].visible_count(), 1);
    assert_close(chart.rows()[0].segment_for(1).unwrap().width(), 100.0);
    assert_close(chart.rows()[2].segment_for(1).unwrap().width(), 20.0);
    assert_eq!(chart.rows()[0].sort_key(), 10.0);
    assert_eq!(chart.rows()[1].sort_key(), 20.0);
    assert_eq!(chart.rows()[2].sort_key(), 4.0);
    assert!(chart.rows().iter().all(|r| r.exclusive() == Some(1)));

    let state = chart.state();
    assert_eq!(state[1].exclusive.as_deref(), Some("B"));
    assert_eq!(state[1].visible_width(), 0.0);
}

#[test]
fn test_exclusive_cleared_by_hide_or_show_of_same_series() {
    let mut chart = abc_chart();
    VisibilityController::show_only(&mut chart, "C");

    VisibilityController::show_bar(&mut chart, "A");
    assert!(chart.rows().iter().all(|r| r.exclusive() == Some(2)));

    VisibilityController::hide_bar(&mut chart, "C");
    assert!(chart.rows().iter().all(|r| r.exclusive().is_none()));
    assert!(chart.rows().iter().all(|r| r.visible_count() == 1));
    assert_close(widths(&chart, 0)[0], 100.0);
}

#[test]
fn test_unknown_series_is_a_no_op() {
    let mut chart = abc_chart();
    VisibilityController::hide_bar(&mut chart, "B");
    let before = chart.state();

    for kind in [
        LegendEventKind::HideBar,
        LegendEventKind::ShowBar,
        LegendEventKind::ShowOnly,
    ] {
        assert!(!chart.handle(&event(kind, "Z")), "{kind}");
    }
    assert_eq!(chart.state(), before);
}

#[test]
fn test_reset_from_unknown_series_still_restores() {
    let mut chart = abc_chart();
    let initial = chart.state();
    VisibilityController::hide_bar(&mut chart, "B");
    VisibilityController::show_only(&mut chart, "A");

    assert!(chart.handle(&event(LegendEventKind::ResetAll, "Z")));
    assert_eq!(chart.state(), initial);
}

#[test]
fn test_sort_key_kept_by_rows_without_isolated_series() {
    let mut chart = StackedBarChart::new(vec![
        row(100.0, &[("A", 5.0), ("B", 10.0)]),
        row(100.0, &[("A", 20.0)]),
    ])
    .unwrap();

    VisibilityController::show_only(&mut chart, "A");
    VisibilityController::show_only(&mut chart, "B");
    assert_eq!(chart.rows()[0].sort_key(), 10.0);
    assert_eq!(chart.rows()[1].sort_key(), 20.0);

    VisibilityController::reset_all(&mut chart, "B");
    assert_eq!(chart.rows()[0].sort_key(), 15.0);
}

#[test]
fn test_catalog_series_without_segments_is_ignored() {
    let mut chart = StackedBarChart::with_series(
        vec![
            gpui_column_chart::Series::new("A", gpui_column_chart::SeriesColor(0x112233)),
            gpui_column_chart::Series::new("ghost", gpui_column_chart::SeriesColor(0x445566)),
        ],
        vec![row(10.0, &[("A", 1.0)])],
        StackedBarConfig::default(),
    )
    .unwrap();
    assert!(!VisibilityController::show_only(&mut chart, "ghost"));
    assert!(chart.rows()[0].segments()[0].visible());
}

#[test]
fn test_reset_all_is_idempotent() {
    let mut chart = abc_chart();
    VisibilityController::hide_bar(&mut chart, "A");
    VisibilityController::show_only(&mut chart, "B");

    VisibilityController::reset_all(&mut chart, "B");
    let once = chart.state();
    VisibilityController::reset_all(&mut chart, "B");
    assert_eq!(chart.state(), once);
}

#[test]
fn test_all_hidden_row_has_zero_widths() {
    let mut chart = StackedBarChart::new(vec![
        row(100.0, &[("A", 3.0)]),
        row(100.0, &[("A", 0.0), ("B", 0.0)]),
    ])
    .unwrap();
    // Zero total: nothing to proportion against.
    assert_eq!(chart.rows()[1].visible_width(), 0.0);

    VisibilityController::hide_bar(&mut chart, "A");
    assert_eq!(chart.rows()[0].visible_count(), 0);
    assert_eq!(chart.rows()[0].visible_width(), 0.0);
    assert!(chart.rows()[1].segments().iter().all(|s| !s.width().is_nan()));
}

#[test]
fn test_columns_have_independent_maxima() {
    let mut chart = StackedBarChart::new(vec![
        row(100.0, &[("A", 10.0), ("B", 10.0)]).in_column("left"),
        row(100.0, &[("A", 40.0), ("B", 10.0)]).in_column("right"),
        row(100.0, &[("A", 20.0), ("B", 30.0)]).in_column("right"),
    ])
    .unwrap();

    let maxima = chart.series_maxima("B", true);
    assert_eq!(maxima.keys().collect::<Vec<_>>(), vec!["left", "right"]);
    assert_eq!(maxima["left"], 10.0);
    assert_eq!(maxima["right"], 40.0);

    VisibilityController::hide_bar(&mut chart, "B");
    assert_close(widths(&chart, 0)[0], 100.0);
    assert_close(widths(&chart, 1)[0], 100.0);
    assert_close(widths(&chart, 2)[0], 50.0);
}

#[test]
fn test_reset_with_column_peak_scaling() {
    let config = StackedBarConfig {
        reset_scaling: ResetScaling::ColumnPeak,
        ..Default::default()
    };
    let mut chart = StackedBarChart::with_config(
        vec![
            row(100.0, &[("A", 10.0), ("B", 10.0)]),
            row(100.0, &[("A", 30.0), ("B", 10.0)]),
        ],
        config,
        &ChartTheme::default(),
    )
    .unwrap();
    assert_close(chart.rows()[0].visible_width(), 50.0);
    assert_close(chart.rows()[1].visible_width(), 100.0);

    VisibilityController::show_only(&mut chart, "B");
    VisibilityController::reset_all(&mut chart, "B");
    assert_close(widths(&chart, 0)[1], 25.0);
    assert_close(chart.rows()[0].segments()[1].x_offset(), 25.0);
}

#[test]
fn test_set_container_width_keeps_reference() {
    let mut chart = abc_chart();
    VisibilityController::hide_bar(&mut chart, "B");
    chart.set_container_width(1, 200.0).unwrap();

    assert_close(widths(&chart, 1)[0], 50.0);
    assert_close(widths(&chart, 1)[2], 150.0);
    assert_close(widths(&chart, 0)[2], 75.0);
    assert!(chart.set_container_width(9, 10.0).is_err());
    assert!(chart.set_container_width(0, f64::NAN).is_err());
}

#[test]
fn test_row_geometry_matches_scaler_over_visible_segments() {
    let mut chart = StackedBarChart::new(vec![
        row(90.0, &[("A", 3.0), ("B", 7.0), ("C", 11.0), ("D", 13.0)]),
        row(90.0, &[("B", 2.0), ("D", 5.0)]),
    ])
    .unwrap();
    VisibilityController::hide_bar(&mut chart, "B");

    for r in chart.rows() {
        let visible: Vec<_> = r.segments().iter().filter(|s| s.visible()).collect();
        let values: Vec<f64> = visible.iter().map(|s| s.value()).collect();
        let expected = scale_widths(&values, r.reference_max(), r.container_width());
        let offsets = stack_offsets(&expected);
        for ((segment, width), x) in visible.iter().zip(&expected).zip(&offsets) {
            assert_eq!(segment.width(), *width);
            assert_eq!(segment.x_offset(), *x);
        }
    }

    // Hidden B sits at the end of A in the first row and at 0 in the second.
    let first = &chart.rows()[0].segments()[1];
    assert_eq!(first.width(), 0.0);
    assert_eq!(first.x_offset(), chart.rows()[0].segments()[0].width());
    assert_eq!(chart.rows()[1].segments()[0].x_offset(), 0.0);
}
