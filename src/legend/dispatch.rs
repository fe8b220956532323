use std::fmt;

use tracing::trace;

/// The four selections a legend can broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendEventKind {
    HideBar,
    ShowBar,
    ShowOnly,
    ResetAll,
}

impl LegendEventKind {
    pub const ALL: [LegendEventKind; 4] = [
        LegendEventKind::HideBar,
        LegendEventKind::ShowBar,
        LegendEventKind::ShowOnly,
        LegendEventKind::ResetAll,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::HideBar => "hideBar",
            Self::ShowBar => "showBar",
            Self::ShowOnly => "showOnly",
            Self::ResetAll => "resetAll",
        }
    }
}

impl fmt::Display for LegendEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque handle of the legend item an event originates from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemHandle(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEvent {
    pub kind: LegendEventKind,
    pub origin: ItemHandle,
    pub series_id: String,
}

type Handler = Box<dyn FnMut(&LegendEvent)>;

/// Synchronous publish/subscribe channel between legend items and the chart.
///
/// Publishing runs every subscriber to completion before it returns. There is
/// no queue: a subscriber cannot publish again since that needs `&mut self`.
#[derive(Default)]
pub struct LegendDispatcher {
    handlers: Vec<Handler>,
}

impl LegendDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LegendEvent) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, kind: LegendEventKind, origin: ItemHandle, series_id: impl Into<String>) {
        let event = LegendEvent {
            kind,
            origin,
            series_id: series_id.into(),
        };
        trace!(kind = %event.kind, series = %event.series_id, "publishing legend event");
        for handler in &mut self.handlers {
            handler(&event);
        }
    }

    pub fn hide_bar(&mut self, origin: ItemHandle, series_id: impl Into<String>) {
        self.publish(LegendEventKind::HideBar, origin, series_id);
    }

    pub fn show_bar(&mut self, origin: ItemHandle, series_id: impl Into<String>) {
        self.publish(LegendEventKind::ShowBar, origin, series_id);
    }

    pub fn show_only(&mut self, origin: ItemHandle, series_id: impl Into<String>) {
        self.publish(LegendEventKind::ShowOnly, origin, series_id);
    }

    pub fn reset_all(&mut self, origin: ItemHandle, series_id: impl Into<String>) {
        self.publish(LegendEventKind::ResetAll, origin, series_id);
    }
}

impl fmt::Debug for LegendDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegendDispatcher")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
