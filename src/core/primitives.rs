use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PlaygroundError, PlaygroundResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlaygroundResult<f64> {
    value.to_f64().ok_or_else(|| {
        PlaygroundError::InvalidInput(format!("{field_name} {value} has no f64 representation"))
    })
}

/// Unix seconds with millisecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
