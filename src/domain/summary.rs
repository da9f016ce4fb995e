//! Scalar market summary for narrative/reporting collaborators.
//!
//! Everything a downstream commentary generator needs is exposed here as
//! plain scalars, extracted once while the analysis is assembled so callers
//! never re-derive them from the raw collections.

use serde::Serialize;

use crate::domain::gaps::FairValueGap;
use crate::domain::indicator::IndicatorFrame;
use crate::domain::levels::{Level, LevelKind};
use crate::domain::series::Series;

/// Latest value of each indicator column; `None` while still in warmup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatestIndicators {
    pub sma9: Option<f64>,
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSummary {
    /// Close of the most recent bar.
    pub last_price: f64,
    /// Percent change versus the previous close; `None` for a 1-bar series.
    pub percent_change: Option<f64>,
    /// Highest high over the whole series.
    pub high: f64,
    /// Lowest low over the whole series.
    pub low: f64,
    /// Sum of all bar volumes.
    pub total_volume: f64,
    /// Up to `summary_levels` supports in contract order (lowest first).
    pub top_supports: Vec<f64>,
    /// Up to `summary_levels` resistances in contract order (highest first).
    pub top_resistances: Vec<f64>,
    /// The most recent gaps, in ascending index order.
    pub recent_gaps: Vec<FairValueGap>,
    pub latest: LatestIndicators,
}

impl MarketSummary {
    pub(crate) fn compute(
        series: &Series,
        frame: &IndicatorFrame,
        levels: &[Level],
        gaps: &[FairValueGap],
        summary_levels: usize,
        recent_gaps: usize,
    ) -> Self {
        let bars = series.bars();
        let last = series.last();
        let percent_change = (bars.len() >= 2).then(|| {
            let prev = bars[bars.len() - 2].close;
            (last.close / prev - 1.0) * 100.0
        });

        let high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let total_volume = bars.iter().map(|b| b.volume).sum();

        let top = |kind: LevelKind| -> Vec<f64> {
            levels
                .iter()
                .filter(|l| l.kind == kind)
                .take(summary_levels)
                .map(|l| l.price)
                .collect()
        };

        let i = frame.len() - 1;
        MarketSummary {
            last_price: last.close,
            percent_change,
            high,
            low,
            total_volume,
            top_supports: top(LevelKind::Support),
            top_resistances: top(LevelKind::Resistance),
            recent_gaps: gaps
                .iter()
                .skip(gaps.len().saturating_sub(recent_gaps))
                .copied()
                .collect(),
            latest: LatestIndicators {
                sma9: frame.sma9[i],
                sma20: frame.sma20[i],
                sma50: frame.sma50[i],
                rsi14: frame.rsi14[i],
                macd: frame.macd[i],
                macd_signal: frame.macd_signal[i],
                macd_hist: frame.macd_hist[i],
            },
        }
    }
}
