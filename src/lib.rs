//! marketlens: technical analysis core for a single-instrument OHLCV series.
//!
//! Hexagonal architecture: pure analysis logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
