//! Integration tests for the CLI orchestration layer and adapters.
//!
//! Covers config building from INI files, the csv-to-analysis pipeline,
//! and report rendering: everything between the clap surface and the
//! domain core.

mod common;

use common::*;
use marketlens::adapters::csv_adapter::CsvBarSource;
use marketlens::adapters::file_config_adapter::FileConfigAdapter;
use marketlens::adapters::text_report_adapter::TextReportAdapter;
use marketlens::cli::{analysis_config_from_port, build_analysis_config};
use marketlens::domain::analysis::{analyze_with, AnalysisConfig};
use marketlens::domain::error::MarketlensError;
use marketlens::domain::series::Series;
use marketlens::ports::bar_source_port::BarSourcePort;
use marketlens::ports::report_port::ReportPort;
use std::io::Write;

fn write_csv(dir: &tempfile::TempDir, symbol: &str, rows: &[String]) {
    let mut file = std::fs::File::create(dir.path().join(format!("{symbol}.csv"))).unwrap();
    writeln!(file, "timestamp,open,high,low,close,volume").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
}

fn csv_rows_from_closes(closes: &[f64]) -> Vec<String> {
    closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{},{c},{},{},{c},1000",
                ts(i).format("%Y-%m-%d %H:%M:%S"),
                c + 1.0,
                c - 1.0
            )
        })
        .collect()
}

mod config_loading {
    use super::*;

    #[test]
    fn no_config_file_uses_defaults() {
        let config = build_analysis_config(None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.n_levels, 5);
        assert_eq!(config.summary_levels, 3);
    }

    #[test]
    fn ini_overrides_defaults() {
        let adapter = FileConfigAdapter::from_string(
            "[analysis]\nn_levels = 8\nrecent_gaps = 5\n",
        )
        .unwrap();
        let config = analysis_config_from_port(&adapter).unwrap();
        assert_eq!(config.n_levels, 8);
        assert_eq!(config.summary_levels, 3);
        assert_eq!(config.recent_gaps, 5);
    }

    #[test]
    fn zero_levels_is_rejected() {
        let adapter = FileConfigAdapter::from_string("[analysis]\nn_levels = 0\n").unwrap();
        let err = analysis_config_from_port(&adapter).unwrap_err();
        assert!(matches!(err, MarketlensError::ConfigInvalid { .. }));
    }

    #[test]
    fn missing_config_file_is_parse_error() {
        let path = std::path::PathBuf::from("/nonexistent/marketlens.ini");
        let err = build_analysis_config(Some(&path)).unwrap_err();
        assert!(matches!(err, MarketlensError::ConfigParse { .. }));
    }
}

mod csv_pipeline {
    use super::*;

    #[test]
    fn csv_to_analysis_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        write_csv(&dir, "BTC-USD", &csv_rows_from_closes(&closes));

        let source = CsvBarSource::new(dir.path().to_path_buf());
        let bars = source.fetch_bars("BTC-USD").unwrap();
        let series = Series::validate(bars).unwrap();
        let result = analyze_with(&series, &AnalysisConfig::default());

        assert_eq!(result.indicators.len(), 60);
        assert!(result.gaps.is_empty());
        assert_eq!(result.summary.last_price, 159.0);
    }

    #[test]
    fn duplicate_timestamps_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut rows = csv_rows_from_closes(&[100.0, 101.0, 102.0]);
        rows.push(rows[2].clone());
        write_csv(&dir, "DUP", &rows);

        let source = CsvBarSource::new(dir.path().to_path_buf());
        let bars = source.fetch_bars("DUP").unwrap();
        let err = Series::validate(bars).unwrap_err();
        assert_eq!(
            err,
            marketlens::domain::error::ValidationError::NonMonotonicTimestamp { index: 3 }
        );
    }

    #[test]
    fn out_of_order_rows_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let rows = csv_rows_from_closes(&[100.0, 101.0, 102.0]);
        let shuffled = vec![rows[2].clone(), rows[0].clone(), rows[1].clone()];
        write_csv(&dir, "OOO", &shuffled);

        let source = CsvBarSource::new(dir.path().to_path_buf());
        let series = Series::validate(source.fetch_bars("OOO").unwrap()).unwrap();
        assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
    }
}

mod report_rendering {
    use super::*;

    #[test]
    fn text_report_covers_every_section() {
        let closes: Vec<f64> = (0..70)
            .map(|i| 100.0 + ((i * 13) % 19) as f64 - 9.0)
            .collect();
        let series = series_from_closes(&closes);
        let result = analyze_with(&series, &AnalysisConfig::default());

        let mut buf = Vec::new();
        TextReportAdapter.write("ETH-USD", &result, &mut buf).unwrap();
        let report = String::from_utf8(buf).unwrap();

        for heading in [
            "Technical analysis for ETH-USD",
            "Last price:",
            "Support levels:",
            "Resistance levels:",
            "Recent fair value gaps:",
            "Signals:",
        ] {
            assert!(report.contains(heading), "missing {heading:?}:\n{report}");
        }
    }

    #[test]
    fn json_serialization_round_trips_summary() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);
        let result = analyze_with(&series, &AnalysisConfig::default());

        let json = serde_json::to_string(&result.summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["last_price"], 159.0);
        assert!(value["latest"]["sma9"].is_number());
    }
}
