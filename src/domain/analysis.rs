//! Analysis aggregator.
//!
//! Pure assembly: runs the indicator engine and the three detectors (they do
//! not interact) over one validated series and packages their outputs, plus
//! the scalar summary, into a single immutable result.

use serde::Serialize;

use crate::domain::gaps::{self, FairValueGap};
use crate::domain::indicator::IndicatorFrame;
use crate::domain::levels::{self, Level, LevelKind};
use crate::domain::series::Series;
use crate::domain::signal::{self, Signal};
use crate::domain::summary::MarketSummary;

/// Tunable output sizes. The detection algorithms themselves are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Levels kept per kind.
    pub n_levels: usize,
    /// Supports/resistances surfaced in the summary.
    pub summary_levels: usize,
    /// Most recent gaps surfaced in the summary.
    pub recent_gaps: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            n_levels: levels::DEFAULT_N_LEVELS,
            summary_levels: 3,
            recent_gaps: 3,
        }
    }
}

/// Immutable aggregate of everything one analysis pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub indicators: IndicatorFrame,
    /// Supports first (ascending from the lowest extreme), then resistances
    /// (descending from the highest extreme).
    pub levels: Vec<Level>,
    /// Ascending anchor index order.
    pub gaps: Vec<FairValueGap>,
    /// Ascending index order.
    pub signals: Vec<Signal>,
    pub summary: MarketSummary,
}

impl AnalysisResult {
    pub fn supports(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter().filter(|l| l.kind == LevelKind::Support)
    }

    pub fn resistances(&self) -> impl Iterator<Item = &Level> {
        self.levels
            .iter()
            .filter(|l| l.kind == LevelKind::Resistance)
    }
}

/// Analyze a validated series with default output sizes.
pub fn analyze(series: &Series) -> AnalysisResult {
    analyze_with(series, &AnalysisConfig::default())
}

pub fn analyze_with(series: &Series, config: &AnalysisConfig) -> AnalysisResult {
    let indicators = IndicatorFrame::compute(series);
    let levels = levels::find_levels(series, config.n_levels);
    let gaps = gaps::find_gaps(series);
    let signals = signal::generate_signals(series, &indicators);
    let summary = MarketSummary::compute(
        series,
        &indicators,
        &levels,
        &gaps,
        config.summary_levels,
        config.recent_gaps,
    );

    AnalysisResult {
        indicators,
        levels,
        gaps,
        signals,
        summary,
    }
}
