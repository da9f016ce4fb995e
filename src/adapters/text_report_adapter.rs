//! Plain-text report adapter.
//!
//! Renders the scalar summary as a short human-readable briefing: market
//! stats, trend and momentum labels derived from the latest indicator
//! values, key levels with their distance from the last price, recent fair
//! value gaps, and the signal tally.

use std::io::Write;

use crate::domain::analysis::AnalysisResult;
use crate::domain::error::MarketlensError;
use crate::domain::gaps::GapKind;
use crate::domain::signal::SignalKind;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        symbol: &str,
        result: &AnalysisResult,
        out: &mut dyn Write,
    ) -> Result<(), MarketlensError> {
        let summary = &result.summary;

        writeln!(out, "Technical analysis for {symbol}")?;
        writeln!(out)?;
        writeln!(out, "Last price:   {:.2}", summary.last_price)?;
        if let Some(change) = summary.percent_change {
            writeln!(out, "Change:       {change:+.2}%")?;
        }
        writeln!(out, "High:         {:.2}", summary.high)?;
        writeln!(out, "Low:          {:.2}", summary.low)?;
        writeln!(out, "Volume:       {:.0}", summary.total_volume)?;
        writeln!(out)?;

        let latest = summary.latest;
        if let (Some(s9), Some(s20), Some(s50)) = (latest.sma9, latest.sma20, latest.sma50) {
            writeln!(out, "SMA 9/20/50:  {s9:.2} / {s20:.2} / {s50:.2}")?;
            writeln!(out, "Trend:        {}", trend_label(s9, s20, s50))?;
        }
        if let (Some(macd), Some(signal), Some(hist)) =
            (latest.macd, latest.macd_signal, latest.macd_hist)
        {
            writeln!(out, "MACD:         {macd:.4} signal {signal:.4} hist {hist:.4}")?;
            writeln!(out, "Momentum:     {}", momentum_label(macd, signal, hist))?;
        }
        if let Some(rsi) = latest.rsi14 {
            writeln!(out, "RSI 14:       {rsi:.2} ({})", rsi_label(rsi))?;
        }
        writeln!(out)?;

        writeln!(out, "Support levels:")?;
        for price in &summary.top_supports {
            let distance = (price / summary.last_price - 1.0) * 100.0;
            writeln!(out, "  {price:.2} ({distance:+.2}% from last)")?;
        }
        if summary.top_supports.is_empty() {
            writeln!(out, "  none detected")?;
        }
        writeln!(out, "Resistance levels:")?;
        for price in &summary.top_resistances {
            let distance = (price / summary.last_price - 1.0) * 100.0;
            writeln!(out, "  {price:.2} ({distance:+.2}% from last)")?;
        }
        if summary.top_resistances.is_empty() {
            writeln!(out, "  none detected")?;
        }
        writeln!(out)?;

        writeln!(out, "Recent fair value gaps:")?;
        for gap in &summary.recent_gaps {
            let kind = match gap.kind {
                GapKind::Bullish => "bullish",
                GapKind::Bearish => "bearish",
            };
            writeln!(
                out,
                "  {kind} at {:.2} (range {:.2}-{:.2}, bar {})",
                gap.midpoint, gap.bottom, gap.top, gap.index
            )?;
        }
        if summary.recent_gaps.is_empty() {
            writeln!(out, "  none detected")?;
        }

        let buys = result
            .signals
            .iter()
            .filter(|s| s.kind == SignalKind::Buy)
            .count();
        let sells = result.signals.len() - buys;
        writeln!(out)?;
        writeln!(out, "Signals:      {buys} buy, {sells} sell")?;

        Ok(())
    }
}

fn trend_label(sma9: f64, sma20: f64, sma50: f64) -> &'static str {
    if sma9 > sma20 && sma20 > sma50 {
        "strong uptrend (SMA9 > SMA20 > SMA50)"
    } else if sma9 < sma20 && sma20 < sma50 {
        "strong downtrend (SMA9 < SMA20 < SMA50)"
    } else if sma9 > sma20 {
        "short-term moving averages turning bullish"
    } else if sma9 < sma20 {
        "short-term moving averages turning bearish"
    } else {
        "consolidation, no clear direction"
    }
}

fn momentum_label(macd: f64, signal: f64, hist: f64) -> &'static str {
    if macd > signal && hist > 0.0 {
        "bullish momentum increasing"
    } else if macd > signal {
        "bullish momentum emerging"
    } else if hist < 0.0 {
        "bearish momentum increasing"
    } else {
        "bearish momentum emerging"
    }
}

fn rsi_label(rsi: f64) -> &'static str {
    if rsi > 70.0 {
        "overbought"
    } else if rsi < 30.0 {
        "oversold"
    } else {
        "neutral"
    }
}
