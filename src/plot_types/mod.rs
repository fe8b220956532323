// Plot types module

pub mod bar;

pub use bar::{BarCell, BarGeometry, BarPlot};
