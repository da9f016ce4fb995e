//! Buy/sell signal generation from indicator crossovers.

use serde::Serialize;

use crate::domain::indicator::IndicatorFrame;
use crate::domain::series::Series;

/// No signal is evaluated before this index; the 50-period SMA is the
/// longest input any rule reads.
pub const SIGNAL_FLOOR: usize = 50;

/// Plot offsets keeping markers clear of the bar itself.
const BUY_OFFSET: f64 = 0.998;
const SELL_OFFSET: f64 = 1.002;

pub const RULE_SMA_CROSSOVER: &str = "sma9_cross_above_sma20";
pub const RULE_RSI_OVERBOUGHT: &str = "rsi_overbought";
pub const RULE_MACD_CROSS_UNDER: &str = "macd_cross_below_signal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
}

/// One discrete signal event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Signal {
    pub kind: SignalKind,
    /// Index of the bar the signal fired on.
    pub index: usize,
    /// Trigger price, offset slightly from the bar's low (buy) or high
    /// (sell) for unambiguous plotting.
    pub price: f64,
    /// Name of the rule that fired.
    pub rule: &'static str,
}

/// Evaluate both rules at every index from [`SIGNAL_FLOOR`] on, using the
/// pair (i-1, i).
///
/// Buy: SMA9 crosses from at-or-below to above SMA20, RSI < 60 and MACD
/// line > 0. Sell: RSI > 70, or the MACD line crosses under its signal
/// line. The rules are independent; both may fire on the same bar. A rule
/// whose inputs are still in warmup at i or i-1 is skipped at that index,
/// since a missing value never satisfies a threshold.
pub fn generate_signals(series: &Series, frame: &IndicatorFrame) -> Vec<Signal> {
    let bars = series.bars();
    let mut signals = Vec::new();

    for i in SIGNAL_FLOOR..bars.len() {
        if let (Some(s9_prev), Some(s9), Some(s20_prev), Some(s20), Some(rsi), Some(macd)) = (
            frame.sma9[i - 1],
            frame.sma9[i],
            frame.sma20[i - 1],
            frame.sma20[i],
            frame.rsi14[i],
            frame.macd[i],
        ) {
            if s9_prev <= s20_prev && s9 > s20 && rsi < 60.0 && macd > 0.0 {
                signals.push(Signal {
                    kind: SignalKind::Buy,
                    index: i,
                    price: bars[i].low * BUY_OFFSET,
                    rule: RULE_SMA_CROSSOVER,
                });
            }
        }

        let overbought = frame.rsi14[i].is_some_and(|rsi| rsi > 70.0);
        let cross_under = match (
            frame.macd[i - 1],
            frame.macd_signal[i - 1],
            frame.macd[i],
            frame.macd_signal[i],
        ) {
            (Some(m_prev), Some(s_prev), Some(m), Some(s)) => m_prev >= s_prev && m < s,
            _ => false,
        };

        if overbought || cross_under {
            signals.push(Signal {
                kind: SignalKind::Sell,
                index: i,
                price: bars[i].high * SELL_OFFSET,
                // when both conditions hold the RSI rule is the one recorded
                rule: if overbought {
                    RULE_RSI_OVERBOUGHT
                } else {
                    RULE_MACD_CROSS_UNDER
                },
            });
        }
    }

    signals
}
