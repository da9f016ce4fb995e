//! Technical indicator engine.
//!
//! Each indicator is computed in a single left-to-right pass over the close
//! prices; [`IndicatorFrame`] collects the results as parallel columns
//! aligned 1:1 with the series indices. `None` is the explicit "not yet
//! available" marker for warmup entries, never a silent zero.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

use serde::Serialize;

use crate::domain::series::Series;

pub const SMA_SHORT: usize = 9;
pub const SMA_MEDIUM: usize = 20;
pub const SMA_LONG: usize = 50;
pub const RSI_PERIOD: usize = 14;

/// Parallel indicator columns for one series.
///
/// The EMA-derived columns (ema12, ema26, macd, macd_signal, macd_hist) are
/// `Some` at every index because the EMAs are seeded with their first input;
/// the SMA and RSI columns are `None` until their windows fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorFrame {
    pub sma9: Vec<Option<f64>>,
    pub sma20: Vec<Option<f64>>,
    pub sma50: Vec<Option<f64>>,
    pub rsi14: Vec<Option<f64>>,
    pub ema12: Vec<Option<f64>>,
    pub ema26: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub macd_hist: Vec<Option<f64>>,
}

impl IndicatorFrame {
    pub fn compute(series: &Series) -> Self {
        let closes = series.closes();

        let macd::Macd {
            line,
            signal,
            histogram,
        } = macd::macd(&closes);

        IndicatorFrame {
            sma9: sma::sma(&closes, SMA_SHORT),
            sma20: sma::sma(&closes, SMA_MEDIUM),
            sma50: sma::sma(&closes, SMA_LONG),
            rsi14: rsi::rsi(&closes, RSI_PERIOD),
            ema12: wrap(ema::ema(&closes, macd::MACD_FAST)),
            ema26: wrap(ema::ema(&closes, macd::MACD_SLOW)),
            macd: wrap(line),
            macd_signal: wrap(signal),
            macd_hist: wrap(histogram),
        }
    }

    /// Number of rows; all columns share the series length.
    pub fn len(&self) -> usize {
        self.sma9.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sma9.is_empty()
    }
}

fn wrap(values: Vec<f64>) -> Vec<Option<f64>> {
    values.into_iter().map(Some).collect()
}
