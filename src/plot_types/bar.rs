use crate::data_types::{BarPlotConfig, SeriesColor};
use crate::scales::ProportionalScale;
use eyre::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A table cell holding one single-series bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarCell {
    #[serde(default)]
    pub column: String,
    pub value: f64,
    pub container_width: f64,
    #[serde(default)]
    pub color: Option<SeriesColor>,
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl BarCell {
    pub fn new(column: impl Into<String>, value: f64, container_width: f64) -> Self {
        Self {
            column: column.into(),
            value,
            container_width,
            color: None,
            tooltip: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarGeometry {
    pub column: String,
    pub value: f64,
    pub container_width: f64,
    pub width: f64,
    pub color: SeriesColor,
    pub tooltip: Option<String>,
}

/// Single-series inline bars.
///
/// Each bar is scaled once against the largest value of its column; there is
/// no legend and no later rescale except on a width change.
#[derive(Clone, Debug)]
pub struct BarPlot {
    pub config: BarPlotConfig,
    bars: Vec<BarGeometry>,
    column_maxima: IndexMap<String, f64>,
}

impl BarPlot {
    pub fn new(cells: Vec<BarCell>) -> Result<Self> {
        Self::with_config(cells, BarPlotConfig::default())
    }

    pub fn with_config(cells: Vec<BarCell>, config: BarPlotConfig) -> Result<Self> {
        let mut column_maxima: IndexMap<String, f64> = IndexMap::new();
        for (idx, cell) in cells.iter().enumerate() {
            eyre::ensure!(
                cell.value.is_finite() && cell.value >= 0.0,
                "cell {}: invalid bar value {}",
                idx,
                cell.value
            );
            eyre::ensure!(
                cell.container_width.is_finite() && cell.container_width >= 0.0,
                "cell {}: container width {} must be a finite, non-negative number",
                idx,
                cell.container_width
            );
            let entry = column_maxima.entry(cell.column.clone()).or_insert(0.0);
            *entry = entry.max(cell.value);
        }

        let bars = cells
            .into_iter()
            .map(|cell| {
                let reference = column_maxima.get(&cell.column).copied().unwrap_or(0.0);
                BarGeometry {
                    width: ProportionalScale::new(reference, cell.container_width).map(cell.value),
                    color: cell.color.unwrap_or(config.color),
                    column: cell.column,
                    value: cell.value,
                    container_width: cell.container_width,
                    tooltip: cell.tooltip,
                }
            })
            .collect::<Vec<_>>();
        debug!(bars = bars.len(), columns = column_maxima.len(), "laid out inline bars");

        Ok(Self {
            config,
            bars,
            column_maxima,
        })
    }

    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    pub fn column_maximum(&self, column: &str) -> Option<f64> {
        self.column_maxima.get(column).copied()
    }

    /// Re-renders one bar at a new container width.
    pub fn set_container_width(&mut self, idx: usize, width: f64) -> Result<()> {
        eyre::ensure!(
            width.is_finite() && width >= 0.0,
            "container width {} must be a finite, non-negative number",
            width
        );
        let Some(bar) = self.bars.get_mut(idx) else {
            eyre::bail!("no bar at index {}", idx);
        };
        let reference = self.column_maxima.get(&bar.column).copied().unwrap_or(0.0);
        bar.container_width = width;
        bar.width = ProportionalScale::new(reference, width).map(bar.value);
        Ok(())
    }
}
