//! Domain error types.

/// Rejection reasons from [`Series::validate`](crate::domain::series::Series::validate).
///
/// Raised only at the series boundary: the detectors downstream treat
/// insufficient data as an empty result, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("series contains no bars")]
    EmptySeries,

    #[error("timestamps do not strictly increase at bar {index}")]
    NonMonotonicTimestamp { index: usize },

    #[error("invalid OHLC values at bar {index}: {reason}")]
    InvalidOhlc { index: usize, reason: String },
}

/// Top-level error type for marketlens.
#[derive(Debug, thiserror::Error)]
pub enum MarketlensError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("data error in {source_name}: {reason}")]
    Data { source_name: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MarketlensError> for std::process::ExitCode {
    fn from(err: &MarketlensError) -> Self {
        let code: u8 = match err {
            MarketlensError::Io(_) => 1,
            MarketlensError::ConfigParse { .. } | MarketlensError::ConfigInvalid { .. } => 2,
            MarketlensError::Data { .. } => 3,
            MarketlensError::Validation(_) => 4,
            MarketlensError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::NonMonotonicTimestamp { index: 3 };
        assert_eq!(err.to_string(), "timestamps do not strictly increase at bar 3");
    }

    #[test]
    fn validation_wraps_transparently() {
        let err: MarketlensError = ValidationError::EmptySeries.into();
        assert_eq!(err.to_string(), "series contains no bars");
    }

    #[test]
    fn exit_codes_distinguish_error_classes() {
        let validation: MarketlensError = ValidationError::EmptySeries.into();
        let data = MarketlensError::Data {
            source_name: "BTC-USD.csv".into(),
            reason: "missing close column".into(),
        };
        // ExitCode has no accessor; compare via Debug formatting.
        assert_eq!(
            format!("{:?}", std::process::ExitCode::from(&validation)),
            format!("{:?}", std::process::ExitCode::from(4u8))
        );
        assert_eq!(
            format!("{:?}", std::process::ExitCode::from(&data)),
            format!("{:?}", std::process::ExitCode::from(3u8))
        );
    }
}
