use chrono::{DateTime, Utc};
#[cfg(feature = "parallel-render")]
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::core::RenderedPoint;
use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{PlaygroundError, PlaygroundResult};

/// Paired x/y sequences of equal length.
///
/// The series owns its values and never changes after construction, so
/// [`PointSeries::render`] is a pure function of the stored state and may be
/// called any number of times with identical results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeries {
    xvalues: Vec<f64>,
    yvalues: Vec<f64>,
}

impl PointSeries {
    /// Builds a series from two ordered sequences.
    ///
    /// Mismatched lengths are rejected instead of truncated or padded.
    pub fn new(xvalues: Vec<f64>, yvalues: Vec<f64>) -> PlaygroundResult<Self> {
        if xvalues.len() != yvalues.len() {
            return Err(PlaygroundError::InvalidInput(format!(
                "xvalues and yvalues must have equal length (got {} and {})",
                xvalues.len(),
                yvalues.len()
            )));
        }
        Ok(Self { xvalues, yvalues })
    }

    /// Builds a series from UTC timestamps and decimal values.
    ///
    /// Timestamps become unix seconds; decimals are converted to `f64`.
    pub fn from_decimal_time(
        times: &[DateTime<Utc>],
        values: &[Decimal],
    ) -> PlaygroundResult<Self> {
        if times.len() != values.len() {
            return Err(PlaygroundError::InvalidInput(format!(
                "times and values must have equal length (got {} and {})",
                times.len(),
                values.len()
            )));
        }

        let xvalues = times.iter().copied().map(datetime_to_unix_seconds).collect();
        let yvalues = values
            .iter()
            .map(|value| decimal_to_f64(*value, "value"))
            .collect::<PlaygroundResult<Vec<_>>>()?;
        Self::new(xvalues, yvalues)
    }

    #[must_use]
    pub fn xvalues(&self) -> &[f64] {
        &self.xvalues
    }

    #[must_use]
    pub fn yvalues(&self) -> &[f64] {
        &self.yvalues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xvalues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xvalues.is_empty()
    }

    /// Lazily pairs `xvalues[i]` with `yvalues[i]` in input order.
    pub fn points(&self) -> impl Iterator<Item = RenderedPoint> + '_ {
        self.xvalues
            .iter()
            .zip(&self.yvalues)
            .map(|(x, y)| RenderedPoint::new(*x, *y))
    }

    /// Produces one [`RenderedPoint`] per index, in input order.
    #[must_use]
    pub fn render(&self) -> Vec<RenderedPoint> {
        trace!(count = self.len(), "render point series");

        #[cfg(feature = "parallel-render")]
        {
            self.xvalues
                .par_iter()
                .zip(self.yvalues.par_iter())
                .map(|(x, y)| RenderedPoint::new(*x, *y))
                .collect()
        }

        #[cfg(not(feature = "parallel-render"))]
        {
            self.points().collect()
        }
    }
}
