//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{build_launch_args, resolve_config_override, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunDashboard(LaunchProfile),
    Preflight(LaunchProfile),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Check launch prerequisites without installing or starting anything.
    #[command(about = "Check launch prerequisites without installing or starting anything")]
    Preflight,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Launcher for the Streamlit log-visualization dashboard",
    long_about = None
)]
pub struct LaunchProfileArgs {
    /// Path to launcher.toml (overrides LAUNCHER_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Skip the automatic dependency install when streamlit is missing.
    #[arg(long, default_value_t = false)]
    pub no_install: bool,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchProfileArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn build(self) -> Result<LaunchProfile> {
        let config_path = resolve_config_override(self.config_override)?;
        let launch_args = build_launch_args(config_path.as_deref(), self.no_install);

        Ok(LaunchProfile {
            config_path,
            no_install: self.no_install,
            launch_args,
        })
    }

    /// Parse CLI args into either dashboard launch mode or check-only mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command.clone() {
            Some(CliCommand::Preflight) => Ok(ParsedCommand::Preflight(self.build()?)),
            None => Ok(ParsedCommand::RunDashboard(self.build()?)),
        }
    }
}
