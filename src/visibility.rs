use crate::chart::StackedBarChart;
use crate::data_types::ResetScaling;
use crate::legend::{LegendEvent, LegendEventKind};
use tracing::{debug, trace};

/// VisibilityController applies legend selections to the rows of a chart
/// independently of any rendering surface.
///
/// Every operation broadcasts to all rows, leaves each row's widths and offsets
/// at their final values, and never fails. Hide, show and show-only naming a
/// series that no row carries are ignored and return `false`.
pub struct VisibilityController;

impl VisibilityController {
    pub fn apply(chart: &mut StackedBarChart, event: &LegendEvent) -> bool {
        match event.kind {
            LegendEventKind::HideBar => Self::hide_bar(chart, &event.series_id),
            LegendEventKind::ShowBar => Self::show_bar(chart, &event.series_id),
            LegendEventKind::ShowOnly => Self::show_only(chart, &event.series_id),
            LegendEventKind::ResetAll => Self::reset_all(chart, &event.series_id),
        }
    }

    /// Hides `series_id` everywhere and rescales what remains against the
    /// largest remaining row sum of each column.
    pub fn hide_bar(chart: &mut StackedBarChart, series_id: &str) -> bool {
        let Some(target) = Self::resolve(chart, series_id) else {
            return false;
        };
        // Maxima must see the target as already hidden.
        let maxima = chart.series_maxima(series_id, true);
        for row in &mut chart.rows {
            if let Some(segment) = row.segment_for_mut(target) {
                segment.visible = false;
                segment.width = 0.0;
            }
            if row.exclusive == Some(target) {
                row.exclusive = None;
            }
            let reference = maxima.get(&row.column).copied().unwrap_or(0.0);
            row.rescale(reference);
        }
        debug!(series = series_id, ?maxima, "hid bar");
        Self::trace_rows(chart);
        true
    }

    /// Reveals `series_id` everywhere and rescales against the largest visible
    /// row sum of each column, target included.
    pub fn show_bar(chart: &mut StackedBarChart, series_id: &str) -> bool {
        let Some(target) = Self::resolve(chart, series_id) else {
            return false;
        };
        let maxima = chart.series_maxima(series_id, false);
        for row in &mut chart.rows {
            if let Some(segment) = row.segment_for_mut(target) {
                segment.visible = true;
            }
            if row.exclusive == Some(target) {
                row.exclusive = None;
            }
            let reference = maxima.get(&row.column).copied().unwrap_or(0.0);
            row.rescale(reference);
        }
        debug!(series = series_id, ?maxima, "showed bar");
        Self::trace_rows(chart);
        true
    }

    /// Leaves only `series_id` visible, scaled against its own peak across all
    /// rows so the lone bars compare with each other.
    pub fn show_only(chart: &mut StackedBarChart, series_id: &str) -> bool {
        let Some(target) = Self::resolve(chart, series_id) else {
            return false;
        };
        let peak = chart.series_peak(series_id);
        for row in &mut chart.rows {
            for segment in &mut row.segments {
                segment.visible = segment.series == target;
            }
            row.exclusive = Some(target);
            if let Some(segment) = row.segment_for(target) {
                row.sort_key = segment.value;
            }
            row.rescale(peak);
        }
        debug!(series = series_id, peak, "showing only");
        Self::trace_rows(chart);
        true
    }

    /// Reveals every segment and restores the load-time layout, whatever
    /// series the reset came from.
    pub fn reset_all(chart: &mut StackedBarChart, series_id: &str) -> bool {
        Self::restore(chart);
        debug!(origin = series_id, "reset all bars");
        true
    }

    /// The load-time layout: everything visible, each row proportioned to its
    /// fixed total (or to its column's largest total with `ResetScaling::ColumnPeak`).
    pub fn restore(chart: &mut StackedBarChart) {
        let column_totals = match chart.config.reset_scaling {
            ResetScaling::RowTotal => None,
            ResetScaling::ColumnPeak => Some(chart.column_totals()),
        };
        for row in &mut chart.rows {
            for segment in &mut row.segments {
                segment.visible = true;
            }
            row.exclusive = None;
            row.sort_key = row.total_value;
            let reference = column_totals
                .as_ref()
                .and_then(|totals| totals.get(&row.column).copied())
                .unwrap_or(row.total_value);
            row.rescale(reference);
        }
        Self::trace_rows(chart);
    }

    fn resolve(chart: &StackedBarChart, series_id: &str) -> Option<usize> {
        let target = chart
            .series
            .index_of(series_id)
            .filter(|&idx| chart.has_segments_for(idx));
        if target.is_none() {
            debug!(series = series_id, "ignoring legend event for unknown series");
        }
        target
    }

    fn trace_rows(chart: &StackedBarChart) {
        for (idx, row) in chart.rows.iter().enumerate() {
            trace!(
                row = idx,
                reference = row.reference_max,
                width = row.visible_width(),
                visible = row.visible_count(),
                "row layout"
            );
        }
    }
}
