//! Port traits decoupling the analysis core from its collaborators.

pub mod bar_source_port;
pub mod config_port;
pub mod report_port;
