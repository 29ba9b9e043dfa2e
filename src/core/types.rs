use serde::{Deserialize, Serialize};

/// One `(x, y)` pair taken positionally from a [`PointSeries`](super::PointSeries).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedPoint {
    pub x: f64,
    pub y: f64,
}

impl RenderedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for RenderedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
