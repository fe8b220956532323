use gpui::prelude::*;
use gpui::*;
use gpui_column_chart::{ChartView, RowInput, SegmentInput, StackedBarChart};

const ROWS: &str = r#"[
    {"column": "jobs", "container_width": 240, "segments": [
        {"series": "passed", "value": 42, "label": "42 jobs"},
        {"series": "failed", "value": 3, "label": "3 jobs"},
        {"series": "skipped", "value": 7, "label": "7 jobs"}]},
    {"column": "jobs", "container_width": 240, "segments": [
        {"series": "passed", "value": 18},
        {"series": "skipped", "value": 2}]},
    {"column": "jobs", "container_width": 240, "segments": [
        {"series": "passed", "value": 30},
        {"series": "failed", "value": 11},
        {"series": "skipped", "value": 1}]}
]"#;

struct DemoApp {
    chart: Entity<ChartView>,
}

impl DemoApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let mut rows: Vec<RowInput> = serde_json::from_str(ROWS).expect("demo rows are valid JSON");
        rows.push(RowInput::new(
            240.0,
            vec![
                SegmentInput::new("passed", 5.0),
                SegmentInput::new("failed", 5.0),
            ],
        ).in_column("jobs"));

        let chart = StackedBarChart::new(rows).expect("demo rows are valid");
        let chart = cx.new(|cx| ChartView::new(chart, cx));
        Self { chart }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .p_4()
            .bg(gpui::white())
            .child(self.chart.clone())
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
