use serde::{Deserialize, Serialize};

use super::dispatch::{ItemHandle, LegendDispatcher, LegendEvent, LegendEventKind};
use crate::chart::StackedBarChart;
use crate::data_types::{Series, SeriesCatalog, SeriesColor};

/// Single-interaction state of a legend item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    #[default]
    Show,
    Hide,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub series_id: String,
    pub color: SeriesColor,
    pub toggle: Toggle,
    /// Set while this item's series is the only one shown.
    pub exclusive: bool,
}

impl LegendItem {
    pub fn is_shown(&self) -> bool {
        self.toggle == Toggle::Show
    }
}

/// Legend items of one chart and the click policy that turns interactions
/// into dispatched events.
#[derive(Debug)]
pub struct LegendControls {
    items: Vec<LegendItem>,
    dispatcher: LegendDispatcher,
}

impl LegendControls {
    /// One item per catalog series.
    pub fn new(series: &SeriesCatalog) -> Self {
        Self::from_series(series.iter())
    }

    /// One item per series that at least one row of `chart` carries. Catalog
    /// series without segments get no item, so every click reaches the chart.
    pub fn for_chart(chart: &StackedBarChart) -> Self {
        Self::from_series(
            chart
                .series()
                .iter()
                .enumerate()
                .filter(|(idx, _)| chart.has_segments_for(*idx))
                .map(|(_, s)| s),
        )
    }

    fn from_series<'a>(series: impl Iterator<Item = &'a Series>) -> Self {
        let items = series
            .map(|s| LegendItem {
                series_id: s.id.clone(),
                color: s.color,
                toggle: Toggle::Show,
                exclusive: false,
            })
            .collect();
        Self {
            items,
            dispatcher: LegendDispatcher::new(),
        }
    }

    pub fn items(&self) -> &[LegendItem] {
        &self.items
    }

    pub fn item(&self, handle: ItemHandle) -> Option<&LegendItem> {
        self.items.get(handle.0)
    }

    pub fn handle_of(&self, series_id: &str) -> Option<ItemHandle> {
        self.items
            .iter()
            .position(|item| item.series_id == series_id)
            .map(ItemHandle)
    }

    pub fn dispatcher_mut(&mut self) -> &mut LegendDispatcher {
        &mut self.dispatcher
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LegendEvent) + 'static) {
        self.dispatcher.subscribe(handler);
    }

    /// Routes a press by its click count: 1 is a single interaction, 2 or more a double one.
    pub fn press(&mut self, handle: ItemHandle, click_count: usize) -> Option<LegendEventKind> {
        match click_count {
            0 => None,
            1 => self.single_click(handle),
            _ => self.double_click(handle),
        }
    }

    /// Exclusive item: reset everything. Otherwise flip the item between hidden and shown.
    pub fn single_click(&mut self, handle: ItemHandle) -> Option<LegendEventKind> {
        let item = self.items.get(handle.0)?;
        let series_id = item.series_id.clone();
        let kind = if item.exclusive {
            for item in &mut self.items {
                item.toggle = Toggle::Show;
                item.exclusive = false;
            }
            LegendEventKind::ResetAll
        } else if item.is_shown() {
            self.items[handle.0].toggle = Toggle::Hide;
            LegendEventKind::HideBar
        } else {
            self.items[handle.0].toggle = Toggle::Show;
            LegendEventKind::ShowBar
        };
        self.dispatcher.publish(kind, handle, series_id);
        Some(kind)
    }

    /// Shows the item's series alone. Ignored while the item is already exclusive.
    pub fn double_click(&mut self, handle: ItemHandle) -> Option<LegendEventKind> {
        let item = self.items.get(handle.0)?;
        if item.exclusive {
            return None;
        }
        let series_id = item.series_id.clone();
        for (idx, item) in self.items.iter_mut().enumerate() {
            let selected = idx == handle.0;
            item.toggle = if selected { Toggle::Show } else { Toggle::Hide };
            item.exclusive = selected;
        }
        self.dispatcher.publish(LegendEventKind::ShowOnly, handle, series_id);
        Some(LegendEventKind::ShowOnly)
    }
}
