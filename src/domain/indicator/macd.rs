//! Moving Average Convergence Divergence.
//!
//! MACD line  = EMA(fast) - EMA(slow)
//! Signal     = EMA(signal) of the MACD line
//! Histogram  = MACD line - signal
//!
//! Because the EMAs are seeded with their first input value, every column is
//! defined from index 0 (the line starts at exactly 0.0).

use crate::domain::indicator::ema::ema;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct Macd {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

pub fn macd(values: &[f64]) -> Macd {
    macd_with_periods(values, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}

pub fn macd_with_periods(
    values: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Macd {
    if values.is_empty() || fast == 0 || slow == 0 || signal_period == 0 {
        return Macd {
            line: Vec::new(),
            signal: Vec::new(),
            histogram: Vec::new(),
        };
    }

    let ema_fast = ema(values, fast);
    let ema_slow = ema(values, slow);

    let line: Vec<f64> = ema_fast
        .iter()
        .zip(&ema_slow)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&line, signal_period);
    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    Macd {
        line,
        signal,
        histogram,
    }
}
