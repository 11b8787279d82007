//! Library crate root re-exporting launcher modules.

pub mod cli;
pub mod config;
pub mod launcher;
pub mod support;
