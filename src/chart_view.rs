//! gpui views: the stacked chart with its legend, and the baseline bar plot.

use crate::chart::StackedBarChart;
use crate::data_types::{LegendConfig, RowLayout, SeriesColor};
use crate::legend::{ItemHandle, LegendControls, LegendEventKind};
use crate::plot_types::BarPlot;
use crate::rendering::{bind, LayoutSnapshot};
use crate::theme::ChartTheme;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// gpui view drawing the rows of a stacked bar chart under a clickable legend.
pub struct ChartView {
    pub chart: Rc<RefCell<StackedBarChart>>,
    legend: LegendControls,
    frame: LayoutSnapshot,
    pub theme: ChartTheme,
    pub legend_config: LegendConfig,
}

impl ChartView {
    pub fn new(chart: StackedBarChart, _cx: &mut Context<Self>) -> Self {
        let mut legend = LegendControls::for_chart(&chart);
        let chart = Rc::new(RefCell::new(chart));
        let frame = LayoutSnapshot::default();
        bind(legend.dispatcher_mut(), chart.clone(), frame.clone());

        Self {
            chart,
            legend,
            frame,
            theme: ChartTheme::default(),
            legend_config: LegendConfig::default(),
        }
    }

    pub fn legend(&self) -> &LegendControls {
        &self.legend
    }

    /// Rows as last delivered to this view.
    pub fn rows(&self) -> Vec<RowLayout> {
        self.frame.rows()
    }

    pub fn press_legend_item(
        &mut self,
        handle: ItemHandle,
        click_count: usize,
        cx: &mut Context<Self>,
    ) -> Option<LegendEventKind> {
        let kind = self.legend.press(handle, click_count);
        if let Some(kind) = kind {
            debug!(%kind, item = handle.0, "legend press");
            cx.notify();
        }
        kind
    }

    fn render_legend(&self, cx: &mut Context<Self>) -> Div {
        let marker = px(self.legend_config.marker_size);
        let label_color = rgb(self.theme.label.0);
        let hidden_fill = rgb(self.theme.hidden_marker.0);

        let mut items = vec![];
        for (idx, item) in self.legend.items().iter().enumerate() {
            let color = rgb(item.color.0);
            items.push(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .cursor_pointer()
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, event: &MouseDownEvent, _win, cx| {
                            this.press_legend_item(ItemHandle(idx), event.click_count, cx);
                        }),
                    )
                    .child(
                        div()
                            .w(marker)
                            .h(marker)
                            .rounded_full()
                            .border_2()
                            .border_color(color)
                            .bg(if item.is_shown() { color } else { hidden_fill }),
                    )
                    .child(
                        div()
                            .text_size(px(11.0))
                            .text_color(label_color)
                            .child(item.series_id.clone()),
                    ),
            );
        }
        div().flex().flex_row().flex_wrap().gap_3().p_2().children(items)
    }

    fn render_rows(&self) -> Div {
        let config = self.chart.borrow().config().clone();
        let bar_height = px(config.bar_height);
        let theme = &self.theme;

        let rows = self.frame.rows().into_iter().enumerate().map(|(row_idx, row)| {
            let segments = row
                .segments
                .into_iter()
                .enumerate()
                .filter(|(_, s)| s.visible && s.width > 0.0)
                .map(|(seg_idx, s)| {
                    div()
                        .id(SharedString::from(format!("segment-{}-{}", row_idx, seg_idx)))
                        .absolute()
                        .top(px(0.0))
                        .left(px(s.x_offset as f32))
                        .w(px(s.width as f32))
                        .h(bar_height)
                        .bg(rgb(s.color.0))
                        .opacity(config.opacity)
                        .hover(|style| style.opacity(config.hover_opacity))
                        .when_some(s.label, |this, label| {
                            this.tooltip(HoverTooltip::builder(label, theme))
                        })
                });
            div()
                .relative()
                .w(px(row.container_width as f32))
                .h(bar_height + px(2.0))
                .children(segments)
        });
        div().flex().flex_col().gap_1().children(rows)
    }
}

impl Render for ChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut root = div()
            .flex()
            .flex_col()
            .gap_2()
            .bg(rgb(self.theme.background.0));
        if self.legend_config.enabled {
            root = root.child(self.render_legend(cx));
        }
        root.child(self.render_rows())
    }
}

/// gpui view of single-series inline bars.
pub struct BarPlotView {
    pub plot: BarPlot,
    pub theme: ChartTheme,
}

impl BarPlotView {
    pub fn new(plot: BarPlot, _cx: &mut Context<Self>) -> Self {
        Self {
            plot,
            theme: ChartTheme::default(),
        }
    }
}

impl Render for BarPlotView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let config = &self.plot.config;
        let bar_height = px(config.bar_height);
        let theme = &self.theme;

        let bars = self.plot.bars().iter().enumerate().map(|(idx, bar)| {
            div()
                .relative()
                .w(px(bar.container_width as f32))
                .h(bar_height + px(2.0))
                .child(
                    div()
                        .id(SharedString::from(format!("bar-{}", idx)))
                        .absolute()
                        .top(px(0.0))
                        .left(px(0.0))
                        .w(px(bar.width as f32))
                        .h(bar_height)
                        .bg(rgb(bar.color.0))
                        .opacity(config.opacity)
                        .hover(|style| style.opacity(1.0))
                        .when_some(bar.tooltip.clone(), |this, text| {
                            this.tooltip(HoverTooltip::builder(text, theme))
                        }),
                )
        });
        div()
            .flex()
            .flex_col()
            .gap_1()
            .bg(rgb(theme.background.0))
            .children(bars)
    }
}

/// Text shown while the pointer rests on a segment or bar.
struct HoverTooltip {
    text: SharedString,
    background: SeriesColor,
    color: SeriesColor,
}

impl HoverTooltip {
    fn builder(
        text: String,
        theme: &ChartTheme,
    ) -> impl Fn(&mut Window, &mut App) -> AnyView + 'static {
        let text = SharedString::from(text);
        let background = theme.tooltip_background;
        let color = theme.tooltip_text;
        move |_window, cx| {
            cx.new(|_| HoverTooltip {
                text: text.clone(),
                background,
                color,
            })
            .into()
        }
    }
}

impl Render for HoverTooltip {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .rounded_sm()
            .bg(rgb(self.background.0))
            .text_color(rgb(self.color.0))
            .text_size(px(11.0))
            .child(self.text.clone())
    }
}
