//! CLI entrypoint module structure.
use anyhow::{Context, Result};
use serde_json::json;

use crate::{
    config::LauncherConfig,
    launcher::{command, LaunchProbe},
    support::paths,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, LaunchProfileArgs, ParsedCommand};
pub use profile::{build_launch_args, resolve_config_override, LaunchProfile};

/// Execute the `preflight` command and return a user-facing JSON payload.
///
/// Checks only: nothing is installed and the dashboard is never started.
pub fn execute_preflight(config: &LauncherConfig, probe: &dyn LaunchProbe) -> Result<String> {
    let cwd = probe
        .current_dir()
        .context("failed to obtain current directory")?;

    let streamlit = probe.resolve_executable(&config.dashboard.streamlit_path);
    let app_dir = paths::absolutize(&config.dashboard.app_dir, &cwd);
    let entry_path = app_dir.join(&config.dashboard.entry_file);
    let app_dir_exists = app_dir.is_dir();
    let entry_file_exists = entry_path.is_file();
    let ready = streamlit.is_some() && app_dir_exists && entry_file_exists;

    let payload = json!({
        "ready": ready,
        "streamlit": streamlit.as_ref().map(|path| path.to_string_lossy().into_owned()),
        "app_dir": app_dir.to_string_lossy(),
        "app_dir_exists": app_dir_exists,
        "entry_file": entry_path.to_string_lossy(),
        "entry_file_exists": entry_file_exists,
        "module_search_path": command::module_search_path(probe.module_path().as_deref(), &cwd),
        "install_packages": config.install.packages,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
