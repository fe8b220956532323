use serde::{Deserialize, Serialize};

use crate::data_types::SeriesColor;

/// d3's `category10` scheme.
pub const CATEGORY10: [SeriesColor; 10] = [
    SeriesColor(0x1f77b4),
    SeriesColor(0xff7f0e),
    SeriesColor(0x2ca02c),
    SeriesColor(0xd62728),
    SeriesColor(0x9467bd),
    SeriesColor(0x8c564b),
    SeriesColor(0xe377c2),
    SeriesColor(0x7f7f7f),
    SeriesColor(0xbcbd22),
    SeriesColor(0x17becf),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub palette: Vec<SeriesColor>,
    /// Marker fill of a legend item whose series is hidden.
    pub hidden_marker: SeriesColor,
    pub label: SeriesColor,
    pub background: SeriesColor,
    pub tooltip_background: SeriesColor,
    pub tooltip_text: SeriesColor,
}

impl ChartTheme {
    /// Colour of the `index`-th series, cycling through the palette.
    pub fn color_for(&self, index: usize) -> SeriesColor {
        if self.palette.is_empty() {
            return CATEGORY10[index % CATEGORY10.len()];
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: CATEGORY10.to_vec(),
            hidden_marker: SeriesColor::WHITE,
            label: SeriesColor(0x333333),
            background: SeriesColor::WHITE,
            tooltip_background: SeriesColor(0x333333),
            tooltip_text: SeriesColor::WHITE,
        }
    }
}
