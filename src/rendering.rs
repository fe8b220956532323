//! Boundary between the chart model and whatever draws it.

use crate::chart::StackedBarChart;
use crate::data_types::RowLayout;
use crate::legend::LegendDispatcher;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Receives the full row geometry after every legend event.
///
/// Implementations own all visual diffing and any transition; the geometry they
/// get is already final.
pub trait ChartRenderer {
    fn render(&mut self, rows: &[RowLayout]);
}

/// Renderer that keeps the last frame for a host painting on its own schedule.
#[derive(Clone, Debug, Default)]
pub struct LayoutSnapshot {
    frame: Rc<RefCell<Vec<RowLayout>>>,
    frames: Rc<RefCell<usize>>,
}

impl LayoutSnapshot {
    pub fn rows(&self) -> Vec<RowLayout> {
        self.frame.borrow().clone()
    }

    /// Number of frames received so far.
    pub fn frame_count(&self) -> usize {
        *self.frames.borrow()
    }
}

impl ChartRenderer for LayoutSnapshot {
    fn render(&mut self, rows: &[RowLayout]) {
        *self.frame.borrow_mut() = rows.to_vec();
        *self.frames.borrow_mut() += 1;
    }
}

/// Wires a chart between a legend dispatcher and a renderer.
///
/// The renderer gets an initial frame right away, then one frame per published
/// event. An event arriving while the host still borrows the chart is dropped.
pub fn bind<R>(dispatcher: &mut LegendDispatcher, chart: Rc<RefCell<StackedBarChart>>, mut renderer: R)
where
    R: ChartRenderer + 'static,
{
    renderer.render(&chart.borrow().state());
    dispatcher.subscribe(move |event| {
        let rows = {
            let Ok(mut chart) = chart.try_borrow_mut() else {
                debug!(kind = %event.kind, "chart busy, dropping legend event");
                return;
            };
            chart.handle(event);
            chart.state()
        };
        renderer.render(&rows);
    });
}
