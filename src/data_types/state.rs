use serde::Serialize;

use super::data::SeriesColor;
use crate::scales::{scale_widths, stack_offsets};

/// The part of a row's bar that belongs to one series.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub(crate) series: usize,
    pub(crate) value: f64,
    pub(crate) label: Option<String>,
    pub(crate) visible: bool,
    pub(crate) width: f64,
    pub(crate) x_offset: f64,
}

impl Segment {
    pub(crate) fn new(series: usize, value: f64, label: Option<String>) -> Self {
        Self {
            series,
            value,
            label,
            visible: true,
            width: 0.0,
            x_offset: 0.0,
        }
    }

    /// Index of the series in the chart's catalog.
    pub fn series(&self) -> usize {
        self.series
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }
}

/// One stacked bar: the segments of a single table cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub(crate) column: String,
    pub(crate) segments: Vec<Segment>,
    pub(crate) total_value: f64,
    pub(crate) container_width: f64,
    /// Reference maximum of the last rescale, reused when the width changes.
    pub(crate) reference_max: f64,
    pub(crate) exclusive: Option<usize>,
    pub(crate) sort_key: f64,
}

impl Row {
    pub(crate) fn new(column: String, segments: Vec<Segment>, container_width: f64) -> Self {
        let total_value = segments.iter().map(|s| s.value).sum();
        Self {
            column,
            segments,
            total_value,
            container_width,
            reference_max: total_value,
            exclusive: None,
            sort_key: total_value,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of every segment value, fixed at load.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn reference_max(&self) -> f64 {
        self.reference_max
    }

    /// Catalog index of the series shown alone, if any.
    pub fn exclusive(&self) -> Option<usize> {
        self.exclusive
    }

    /// Key a hosting table sorts this cell by.
    pub fn sort_key(&self) -> f64 {
        self.sort_key
    }

    pub fn segment_for(&self, series: usize) -> Option<&Segment> {
        self.segments.iter().find(|s| s.series == series)
    }

    pub(crate) fn segment_for_mut(&mut self, series: usize) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.series == series)
    }

    pub fn visible_count(&self) -> usize {
        self.segments.iter().filter(|s| s.visible).count()
    }

    pub fn visible_value(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.value)
            .sum()
    }

    pub fn visible_width(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.width)
            .sum()
    }

    /// Visible value once `series` is forced to `series_visible`.
    pub(crate) fn value_with(&self, series: Option<usize>, series_visible: bool) -> f64 {
        self.segments
            .iter()
            .filter(|s| {
                if Some(s.series) == series {
                    series_visible
                } else {
                    s.visible
                }
            })
            .map(|s| s.value)
            .sum()
    }

    pub(crate) fn rescale(&mut self, reference_max: f64) {
        self.reference_max = reference_max;
        self.relayout();
    }

    /// Recomputes widths and offsets of the visible segments in data order.
    /// Hidden segments get no width and sit at the running cursor.
    pub(crate) fn relayout(&mut self) {
        let values: Vec<f64> = self
            .segments
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.value)
            .collect();
        let widths = scale_widths(&values, self.reference_max, self.container_width);
        let offsets = stack_offsets(&widths);

        let mut placed = widths.into_iter().zip(offsets);
        let mut cursor = 0.0;
        for segment in &mut self.segments {
            let next = if segment.visible { placed.next() } else { None };
            match next {
                Some((width, x)) => {
                    segment.width = width;
                    segment.x_offset = x;
                    cursor = x + width;
                }
                None => {
                    segment.width = 0.0;
                    segment.x_offset = cursor;
                }
            }
        }
    }
}

/// Geometry of one segment as handed to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentLayout {
    pub series_id: String,
    pub color: SeriesColor,
    pub value: f64,
    pub label: Option<String>,
    pub visible: bool,
    pub width: f64,
    pub x_offset: f64,
}

/// Geometry of one row as handed to a renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowLayout {
    pub column: String,
    pub container_width: f64,
    pub sort_key: f64,
    pub exclusive: Option<String>,
    pub segments: Vec<SegmentLayout>,
}

impl RowLayout {
    pub fn segment(&self, series_id: &str) -> Option<&SegmentLayout> {
        self.segments.iter().find(|s| s.series_id == series_id)
    }

    pub fn visible_width(&self) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.width)
            .sum()
    }
}
