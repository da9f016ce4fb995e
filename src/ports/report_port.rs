//! Report generation port trait.

use std::io::Write;

use crate::domain::analysis::AnalysisResult;
use crate::domain::error::MarketlensError;

/// Renders one analysis result for human or machine consumption. The core
/// hands over plain records; layout, color and prose are adapter concerns.
pub trait ReportPort {
    fn write(
        &self,
        symbol: &str,
        result: &AnalysisResult,
        out: &mut dyn Write,
    ) -> Result<(), MarketlensError>;
}
