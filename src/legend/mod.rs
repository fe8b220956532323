//! Legend selection: the event channel and the per-item click policy.

pub mod controls;
pub mod dispatch;

pub use controls::{LegendControls, LegendItem, Toggle};
pub use dispatch::{ItemHandle, LegendDispatcher, LegendEvent, LegendEventKind};
