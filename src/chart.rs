//! Stacked Bar Chart Model
//!
//! `StackedBarChart` is the single source of truth for one table's stacked bars.
//! It owns the frozen series catalog and the rows; the visibility engine mutates
//! the rows in place and renderers read them back through [`StackedBarChart::state`].

use crate::data_types::{
    Row, RowInput, RowLayout, Segment, SegmentLayout, Series, SeriesCatalog, StackedBarConfig,
};
use crate::legend::LegendEvent;
use crate::theme::ChartTheme;
use crate::visibility::VisibilityController;
use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use tracing::info;

#[derive(Clone, Debug)]
pub struct StackedBarChart {
    pub(crate) series: SeriesCatalog,
    pub(crate) rows: Vec<Row>,
    pub(crate) config: StackedBarConfig,
}

impl StackedBarChart {
    /// Builds a chart whose catalog is derived from the rows, coloured with the default theme.
    pub fn new(rows: Vec<RowInput>) -> Result<Self> {
        Self::with_config(rows, StackedBarConfig::default(), &ChartTheme::default())
    }

    pub fn with_config(
        rows: Vec<RowInput>,
        config: StackedBarConfig,
        theme: &ChartTheme,
    ) -> Result<Self> {
        let mut series: Vec<Series> = Vec::new();
        for (row_idx, row) in rows.iter().enumerate() {
            for segment in &row.segments {
                eyre::ensure!(
                    !segment.series.is_empty(),
                    "row {}: segment without a series id",
                    row_idx
                );
                if !series.iter().any(|s| s.id == segment.series) {
                    let color = theme.color_for(series.len());
                    series.push(Series::new(segment.series.clone(), color));
                }
            }
        }
        Self::build(SeriesCatalog::new(series)?, rows, config)
    }

    /// Builds a chart against an explicit catalog. Every segment must name a catalog series.
    pub fn with_series(
        series: Vec<Series>,
        rows: Vec<RowInput>,
        config: StackedBarConfig,
    ) -> Result<Self> {
        Self::build(SeriesCatalog::new(series)?, rows, config)
    }

    /// Builds a chart from a JSON array of rows.
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<RowInput> =
            serde_json::from_str(json).wrap_err("invalid stacked bar row data")?;
        Self::new(rows)
    }

    fn build(series: SeriesCatalog, inputs: Vec<RowInput>, config: StackedBarConfig) -> Result<Self> {
        let mut rows = Vec::with_capacity(inputs.len());
        for (row_idx, input) in inputs.into_iter().enumerate() {
            eyre::ensure!(
                input.container_width.is_finite() && input.container_width >= 0.0,
                "row {}: container width {} must be a finite, non-negative number",
                row_idx,
                input.container_width
            );
            let mut segments: Vec<Segment> = Vec::with_capacity(input.segments.len());
            for segment in input.segments {
                let Some(series_idx) = series.index_of(&segment.series) else {
                    eyre::bail!(
                        "row {}: series `{}` is not in the series catalog",
                        row_idx,
                        segment.series
                    );
                };
                eyre::ensure!(
                    segment.value.is_finite() && segment.value >= 0.0,
                    "row {}: series `{}` has invalid value {}",
                    row_idx,
                    segment.series,
                    segment.value
                );
                if segments.iter().any(|s| s.series == series_idx) {
                    eyre::bail!("row {}: series `{}` appears twice", row_idx, segment.series);
                }
                segments.push(Segment::new(series_idx, segment.value, segment.label));
            }
            rows.push(Row::new(input.column, segments, input.container_width));
        }

        let mut chart = Self {
            series,
            rows,
            config,
        };
        VisibilityController::restore(&mut chart);
        info!(
            rows = chart.rows.len(),
            series = chart.series.len(),
            "loaded stacked bar chart"
        );
        Ok(chart)
    }

    pub fn series(&self) -> &SeriesCatalog {
        &self.series
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn config(&self) -> &StackedBarConfig {
        &self.config
    }

    /// Applies one legend event. Returns `false` when the event named an unknown series.
    pub fn handle(&mut self, event: &LegendEvent) -> bool {
        VisibilityController::apply(self, event)
    }

    /// Re-renders one row at a new width, keeping its current reference maximum.
    pub fn set_container_width(&mut self, row_idx: usize, width: f64) -> Result<()> {
        eyre::ensure!(
            width.is_finite() && width >= 0.0,
            "container width {} must be a finite, non-negative number",
            width
        );
        let Some(row) = self.rows.get_mut(row_idx) else {
            eyre::bail!("no row at index {}", row_idx);
        };
        row.container_width = width;
        row.relayout();
        Ok(())
    }

    /// Whether any row carries a segment of the catalog series `series_idx`.
    pub fn has_segments_for(&self, series_idx: usize) -> bool {
        self.rows
            .iter()
            .any(|row| row.segment_for(series_idx).is_some())
    }

    /// Per column, the largest visible row sum with `target` forced hidden
    /// (`excluding`) or forced visible (`!excluding`).
    ///
    /// This is the reference maximum `hideBar` and `showBar` rescale against.
    /// An unknown `target` leaves every segment at its current visibility.
    pub fn series_maxima(&self, target: &str, excluding: bool) -> IndexMap<String, f64> {
        let target = self.series.index_of(target);
        let mut maxima: IndexMap<String, f64> = IndexMap::new();
        for row in &self.rows {
            let sum = row.value_with(target, !excluding);
            let entry = maxima.entry(row.column.clone()).or_insert(0.0);
            *entry = entry.max(sum);
        }
        maxima
    }

    /// Largest single value of `target` across all rows, 0 if it has none.
    pub fn series_peak(&self, target: &str) -> f64 {
        let Some(target) = self.series.index_of(target) else {
            return 0.0;
        };
        self.rows
            .iter()
            .filter_map(|row| row.segment_for(target))
            .map(|s| s.value)
            .fold(0.0, f64::max)
    }

    /// Largest row total per column.
    pub fn column_totals(&self) -> IndexMap<String, f64> {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for row in &self.rows {
            let entry = totals.entry(row.column.clone()).or_insert(0.0);
            *entry = entry.max(row.total_value);
        }
        totals
    }

    /// Current geometry of every row.
    pub fn state(&self) -> Vec<RowLayout> {
        self.rows
            .iter()
            .map(|row| RowLayout {
                column: row.column.clone(),
                container_width: row.container_width,
                sort_key: row.sort_key,
                exclusive: row
                    .exclusive
                    .and_then(|idx| self.series.get(idx))
                    .map(|s| s.id.clone()),
                segments: row
                    .segments
                    .iter()
                    .filter_map(|segment| {
                        let series = self.series.get(segment.series)?;
                        Some(SegmentLayout {
                            series_id: series.id.clone(),
                            color: series.color,
                            value: segment.value,
                            label: segment.label.clone(),
                            visible: segment.visible,
                            width: segment.width,
                            x_offset: segment.x_offset,
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}
