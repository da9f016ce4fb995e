//! Validated in-memory series store.

use crate::domain::bar::Bar;
use crate::domain::error::ValidationError;

/// An immutable, validated sequence of bars with strictly increasing
/// timestamps. The only way to construct one is [`Series::validate`], so
/// every downstream detector can rely on the bar invariants holding.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Validate and normalize raw bars into a series.
    ///
    /// Bars are sorted ascending by timestamp if they arrive out of order.
    /// Fails with [`ValidationError::EmptySeries`] on zero bars,
    /// [`ValidationError::NonMonotonicTimestamp`] if two bars share a
    /// timestamp, and [`ValidationError::InvalidOhlc`] if any bar violates
    /// the OHLC ordering invariant.
    pub fn validate(mut bars: Vec<Bar>) -> Result<Self, ValidationError> {
        if bars.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        if !bars.windows(2).all(|w| w[0].timestamp <= w[1].timestamp) {
            bars.sort_by_key(|b| b.timestamp);
        }

        for (i, w) in bars.windows(2).enumerate() {
            if w[0].timestamp == w[1].timestamp {
                return Err(ValidationError::NonMonotonicTimestamp { index: i + 1 });
            }
        }

        for (i, bar) in bars.iter().enumerate() {
            bar.check().map_err(|reason| ValidationError::InvalidOhlc {
                index: i,
                reason: reason.to_string(),
            })?;
        }

        Ok(Series { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Last bar. A validated series is never empty.
    pub fn last(&self) -> &Bar {
        &self.bars[self.bars.len() - 1]
    }

    /// Close prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

impl std::ops::Index<usize> for Series {
    type Output = Bar;

    fn index(&self, index: usize) -> &Bar {
        &self.bars[index]
    }
}
