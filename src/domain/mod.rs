//! Core domain types and analysis logic.

pub mod bar;
pub mod series;
pub mod indicator;
pub mod levels;
pub mod gaps;
pub mod signal;
pub mod analysis;
pub mod summary;
pub mod error;
