use serde::{Deserialize, Serialize};

use super::data::SeriesColor;

/// Height in pixels of an inline bar.
pub const DEFAULT_BAR_HEIGHT: f32 = 20.0;

/// How `resetAll` proportions a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetScaling {
    /// Every row fills its container, scaled against its own total.
    #[default]
    RowTotal,
    /// Rows are scaled against the largest total of their column.
    ColumnPeak,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedBarConfig {
    pub bar_height: f32,
    pub opacity: f32,
    pub hover_opacity: f32,
    pub reset_scaling: ResetScaling,
}

impl Default for StackedBarConfig {
    fn default() -> Self {
        Self {
            bar_height: DEFAULT_BAR_HEIGHT,
            opacity: 0.8,
            hover_opacity: 1.0,
            reset_scaling: ResetScaling::RowTotal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarPlotConfig {
    /// Fill used when a cell carries no colour of its own.
    pub color: SeriesColor,
    pub bar_height: f32,
    pub opacity: f32,
}

impl Default for BarPlotConfig {
    fn default() -> Self {
        Self {
            color: SeriesColor(0x1f77b4),
            bar_height: DEFAULT_BAR_HEIGHT,
            opacity: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub enabled: bool,
    /// Diameter of the round marker in front of each label.
    pub marker_size: f32,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker_size: 10.0,
        }
    }
}
