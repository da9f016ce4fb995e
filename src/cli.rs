//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvBarSource;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::analysis::{analyze_with, AnalysisConfig, AnalysisResult};
use crate::domain::error::MarketlensError;
use crate::domain::series::Series;
use crate::ports::bar_source_port::BarSourcePort;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "marketlens", about = "Technical analysis for OHLCV bar series")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full analysis and write a report
    Analyze {
        #[arg(short, long)]
        symbol: String,
        /// Directory containing <symbol>.csv
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the full result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Print the scalar market summary as JSON
    Summary {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a bar file without analyzing it
    Validate {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        data_dir: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            symbol,
            data_dir,
            config,
            output,
            json,
        } => run_analyze(&symbol, &data_dir, config.as_ref(), output.as_ref(), json),
        Command::Summary {
            symbol,
            data_dir,
            config,
        } => run_summary(&symbol, &data_dir, config.as_ref()),
        Command::Validate { symbol, data_dir } => run_validate(&symbol, &data_dir),
    }
}

/// Build the analysis config from an optional INI file, falling back to
/// defaults when no file is given.
pub fn build_analysis_config(
    config_path: Option<&PathBuf>,
) -> Result<AnalysisConfig, MarketlensError> {
    let Some(path) = config_path else {
        return Ok(AnalysisConfig::default());
    };

    let adapter =
        FileConfigAdapter::from_file(path).map_err(|reason| MarketlensError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
    analysis_config_from_port(&adapter)
}

pub fn analysis_config_from_port(
    port: &dyn ConfigPort,
) -> Result<AnalysisConfig, MarketlensError> {
    let defaults = AnalysisConfig::default();
    let config = AnalysisConfig {
        n_levels: port.get_usize("analysis", "n_levels", defaults.n_levels),
        summary_levels: port.get_usize("analysis", "summary_levels", defaults.summary_levels),
        recent_gaps: port.get_usize("analysis", "recent_gaps", defaults.recent_gaps),
    };

    if config.n_levels == 0 {
        return Err(MarketlensError::ConfigInvalid {
            section: "analysis".into(),
            key: "n_levels".into(),
            reason: "must be at least 1".into(),
        });
    }
    Ok(config)
}

fn load_series(symbol: &str, data_dir: &PathBuf) -> Result<Series, MarketlensError> {
    let source = CsvBarSource::new(data_dir.clone());
    eprintln!("Loading bars for {symbol} from {}", data_dir.display());
    let bars = source.fetch_bars(symbol)?;
    let series = Series::validate(bars)?;
    eprintln!("Validated {} bars", series.len());
    Ok(series)
}

fn run_pipeline(
    symbol: &str,
    data_dir: &PathBuf,
    config_path: Option<&PathBuf>,
) -> Result<AnalysisResult, MarketlensError> {
    let config = build_analysis_config(config_path)?;
    let series = load_series(symbol, data_dir)?;
    eprintln!("Analyzing...");
    Ok(analyze_with(&series, &config))
}

fn run_analyze(
    symbol: &str,
    data_dir: &PathBuf,
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    let result = match run_pipeline(symbol, data_dir, config_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let rendered = if json {
        match serde_json::to_string_pretty(&result) {
            Ok(mut s) => {
                s.push('\n');
                Ok(s)
            }
            Err(e) => Err(MarketlensError::Report {
                reason: e.to_string(),
            }),
        }
    } else {
        let mut buf = Vec::new();
        TextReportAdapter
            .write(symbol, &result, &mut buf)
            .map(|()| String::from_utf8_lossy(&buf).into_owned())
    };

    let rendered = match rendered {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                let err = MarketlensError::Io(e);
                eprintln!("error: {err}");
                return (&err).into();
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    ExitCode::SUCCESS
}

fn run_summary(symbol: &str, data_dir: &PathBuf, config_path: Option<&PathBuf>) -> ExitCode {
    let result = match run_pipeline(symbol, data_dir, config_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match serde_json::to_string_pretty(&result.summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let err = MarketlensError::Report {
                reason: e.to_string(),
            };
            eprintln!("error: {err}");
            (&err).into()
        }
    }
}

fn run_validate(symbol: &str, data_dir: &PathBuf) -> ExitCode {
    match load_series(symbol, data_dir) {
        Ok(series) => {
            let first = &series.bars()[0];
            let last = series.last();
            println!(
                "{symbol}: {} bars, {} to {}",
                series.len(),
                first.timestamp,
                last.timestamp
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
