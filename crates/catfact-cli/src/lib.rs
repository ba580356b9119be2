//! Library components for the `catfact` command-line tool.

pub mod config;
pub mod logging;
pub mod report;
pub mod source;
