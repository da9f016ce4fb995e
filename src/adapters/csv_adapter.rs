//! CSV file bar source adapter.
//!
//! Reads `<base>/<symbol>.csv` with a header row and the columns
//! `timestamp,open,high,low,close,volume`. Timestamps may be RFC 3339,
//! `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` (midnight UTC).

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::domain::bar::Bar;
use crate::domain::error::MarketlensError;
use crate::ports::bar_source_port::BarSourcePort;

pub struct CsvBarSource {
    base_path: PathBuf,
}

impl CsvBarSource {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!("unrecognized timestamp format: {value:?}"))
}

fn field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = record
        .get(index)
        .ok_or_else(|| format!("missing {name} column"))?;
    raw.parse()
        .map_err(|e| format!("invalid {name} value {raw:?}: {e}"))
}

impl BarSourcePort for CsvBarSource {
    fn fetch_bars(&self, symbol: &str) -> Result<Vec<Bar>, MarketlensError> {
        let path = self.csv_path(symbol);
        let source_name = path.display().to_string();
        let data_err = |reason: String| MarketlensError::Data {
            source_name: source_name.clone(),
            reason,
        };

        let mut rdr =
            csv::Reader::from_path(&path).map_err(|e| data_err(format!("failed to open: {e}")))?;

        let mut bars = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| data_err(format!("CSV parse error: {e}")))?;
            let row = |reason: String| data_err(format!("row {}: {reason}", line + 1));

            let raw_ts = record
                .get(0)
                .ok_or_else(|| row("missing timestamp column".into()))?;
            let timestamp = parse_timestamp(raw_ts).map_err(&row)?;

            bars.push(Bar {
                timestamp,
                open: field(&record, 1, "open").map_err(&row)?,
                high: field(&record, 2, "high").map_err(&row)?,
                low: field(&record, 3, "low").map_err(&row)?,
                close: field(&record, 4, "close").map_err(&row)?,
                volume: field(&record, 5, "volume").map_err(&row)?,
            });
        }

        Ok(bars)
    }
}
