//! Market data access port trait.

use crate::domain::bar::Bar;
use crate::domain::error::MarketlensError;

/// Supplies the raw bars for one instrument. Where they come from (files,
/// an exchange API, a cache) is an adapter concern; the core only requires
/// a finite sequence of bars that [`Series::validate`] will then check.
///
/// [`Series::validate`]: crate::domain::series::Series::validate
pub trait BarSourcePort {
    fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, MarketlensError>;
}
