//! Support/resistance level detection.
//!
//! A bar is a local minimum iff its close is strictly below the closes of the
//! two bars on each side (fixed 5-bar window); symmetric for maxima. Raw
//! extrema are sorted (supports ascending, resistances descending) and
//! clustered: values within 1% of the observed close range of the running
//! cluster's first member are absorbed, and each closed cluster emits its
//! arithmetic mean as one level. The output order therefore walks in from
//! the extremes of the range, and callers take the first `n_levels` per kind.

use serde::Serialize;

use crate::domain::series::Series;

pub const DEFAULT_N_LEVELS: usize = 5;

/// Cluster width as a fraction of the close range.
const CLUSTER_RANGE_FRACTION: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelKind {
    Support,
    Resistance,
}

/// One clustered price level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level {
    pub price: f64,
    pub kind: LevelKind,
}

/// Find up to `n_levels` support and `n_levels` resistance levels.
///
/// Supports come first (ascending from the lowest extreme), then resistances
/// (descending from the highest extreme). A series shorter than 5 bars has
/// no interior extrema and yields an empty vec, never an error.
pub fn find_levels(series: &Series, n_levels: usize) -> Vec<Level> {
    let closes = series.closes();
    if closes.len() < 5 {
        return Vec::new();
    }

    let mut supports = Vec::new();
    let mut resistances = Vec::new();

    for i in 2..closes.len() - 2 {
        let c = closes[i];
        if c < closes[i - 1] && c < closes[i - 2] && c < closes[i + 1] && c < closes[i + 2] {
            supports.push(c);
        }
        if c > closes[i - 1] && c > closes[i - 2] && c > closes[i + 1] && c > closes[i + 2] {
            resistances.push(c);
        }
    }

    supports.sort_by(|a, b| a.total_cmp(b));
    resistances.sort_by(|a, b| b.total_cmp(a));

    let max = closes.iter().cloned().fold(f64::MIN, f64::max);
    let min = closes.iter().cloned().fold(f64::MAX, f64::min);
    let threshold = (max - min) * CLUSTER_RANGE_FRACTION;

    let mut levels = Vec::new();
    for price in cluster(&supports, threshold).into_iter().take(n_levels) {
        levels.push(Level {
            price,
            kind: LevelKind::Support,
        });
    }
    for price in cluster(&resistances, threshold).into_iter().take(n_levels) {
        levels.push(Level {
            price,
            kind: LevelKind::Resistance,
        });
    }
    levels
}

/// Walk a sorted list and merge runs of nearby values into their means.
///
/// Membership is judged against the first value of the running cluster, not
/// the previous member, so a slow drift cannot chain arbitrarily far.
fn cluster(sorted: &[f64], threshold: f64) -> Vec<f64> {
    let Some(&first) = sorted.first() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut cluster_first = first;
    let mut sum = first;
    let mut count = 1usize;

    for &value in &sorted[1..] {
        if (value - cluster_first).abs() < threshold {
            sum += value;
            count += 1;
        } else {
            out.push(sum / count as f64);
            cluster_first = value;
            sum = value;
            count = 1;
        }
    }
    out.push(sum / count as f64);
    out
}
