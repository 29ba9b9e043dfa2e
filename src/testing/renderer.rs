use crate::core::{Render, RenderedPoint};

use super::MockFn;

/// [`Render`] double that hands out fixed points and counts render calls.
#[derive(Debug)]
pub struct RecordingRenderer {
    render: MockFn<(), Vec<RenderedPoint>>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new(points: Vec<RenderedPoint>) -> Self {
        Self {
            render: MockFn::returning(points),
        }
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render.call_count()
    }

    #[must_use]
    pub fn was_rendered_times(&self, n: usize) -> bool {
        self.render.was_called_times(n)
    }
}

impl Render for RecordingRenderer {
    fn render(&self) -> Vec<RenderedPoint> {
        self.render.call(())
    }
}
