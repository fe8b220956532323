//! gpui_column_chart: inline bar charts for table cells
//!
//! Stacked bars whose series can be hidden, shown, isolated and reset from a
//! legend, plus single-series baseline bars. Geometry is computed without any
//! rendering surface; the `gpui` feature adds a view drawing it.

pub mod chart;
#[cfg(feature = "gpui")]
pub mod chart_view;
pub mod data_types;
pub mod legend;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod visibility;

pub use chart::StackedBarChart;
#[cfg(feature = "gpui")]
pub use chart_view::{BarPlotView, ChartView};
pub use data_types::{RowInput, RowLayout, SegmentInput, SegmentLayout, Series, SeriesColor};
pub use legend::{ItemHandle, LegendControls, LegendDispatcher, LegendEvent, LegendEventKind};
pub use plot_types::{BarCell, BarPlot};
pub use rendering::{bind, ChartRenderer, LayoutSnapshot};
pub use visibility::VisibilityController;
