//! CLI library components for the business-hours standardizer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
