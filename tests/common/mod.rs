//! Shared helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use marketlens::domain::bar::Bar;
use marketlens::domain::series::Series;

pub fn ts(i: usize) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(i as i64)
}

pub fn make_bar(i: usize, open: f64, high: f64, low: f64, close: f64) -> Bar {
    Bar {
        timestamp: ts(i),
        open,
        high,
        low,
        close,
        volume: 1_000.0,
    }
}

/// Bars with a one-unit wick on each side of the close.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| make_bar(i, close, close + 1.0, close - 1.0, close))
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> Series {
    Series::validate(bars_from_closes(closes)).unwrap()
}
