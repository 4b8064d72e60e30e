//! CLI library components for podium.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
