//! Fair value gap detection.
//!
//! A fair value gap is a price interval skipped entirely between the bars on
//! either side of an anchor: a 3-bar window where the middle bar's range
//! never bridges the gap. The anchor bar itself is not examined.

use serde::Serialize;

use crate::domain::series::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Bullish,
    Bearish,
}

/// One unfilled imbalance zone, anchored at a series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairValueGap {
    pub kind: GapKind,
    /// Index of the middle bar of the 3-bar window.
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
    pub midpoint: f64,
}

/// Scan for gaps at every anchor index in `[1, len - 2]`, in ascending
/// index order.
///
/// Bullish: `next.low > prev.high`, zone `[prev.high, next.low]`.
/// Bearish: `next.high < prev.low`, zone `[next.high, prev.low]`.
/// Both conditions are checked independently per anchor; a pathological but
/// valid series can emit both kinds at the same anchor (bullish first).
/// A series shorter than 3 bars yields an empty vec, never an error.
pub fn find_gaps(series: &Series) -> Vec<FairValueGap> {
    let bars = series.bars();
    if bars.len() < 3 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    for i in 1..bars.len() - 1 {
        let prev = &bars[i - 1];
        let next = &bars[i + 1];

        if next.low > prev.high {
            gaps.push(FairValueGap {
                kind: GapKind::Bullish,
                index: i,
                top: next.low,
                bottom: prev.high,
                midpoint: (next.low + prev.high) / 2.0,
            });
        }
        if next.high < prev.low {
            gaps.push(FairValueGap {
                kind: GapKind::Bearish,
                index: i,
                top: prev.low,
                bottom: next.high,
                midpoint: (prev.low + next.high) / 2.0,
            });
        }
    }
    gaps
}
