use std::sync::Arc;

use crate::core::{PointSeries, RenderedPoint};

/// Anything that turns its data into renderable points.
///
/// [`Playground`](crate::pipeline::Playground) only depends on this trait, so
/// tests hand it a [`RecordingRenderer`](crate::testing::RecordingRenderer)
/// instead of a real series.
pub trait Render {
    fn render(&self) -> Vec<RenderedPoint>;
}

impl Render for PointSeries {
    fn render(&self) -> Vec<RenderedPoint> {
        PointSeries::render(self)
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn render(&self) -> Vec<RenderedPoint> {
        (**self).render()
    }
}

impl<R: Render + ?Sized> Render for Arc<R> {
    fn render(&self) -> Vec<RenderedPoint> {
        (**self).render()
    }
}
