//! OHLCV bar representation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One open/high/low/close/volume interval. Immutable once constructed;
/// invariants are enforced when a series is validated, not per field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Checks `low <= min(open, close) <= max(open, close) <= high`, all
    /// prices finite and positive, volume finite and non-negative.
    /// Returns the first violated condition.
    pub fn check(&self) -> Result<(), &'static str> {
        for price in [self.open, self.high, self.low, self.close] {
            if !price.is_finite() {
                return Err("price is not finite");
            }
            if price <= 0.0 {
                return Err("price is not positive");
            }
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err("volume is negative or not finite");
        }
        if self.low > self.open.min(self.close) {
            return Err("low exceeds candle body");
        }
        if self.high < self.open.max(self.close) {
            return Err("high is below candle body");
        }
        Ok(())
    }
}
