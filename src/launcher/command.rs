//! Shared helpers for building the dashboard server command.

use std::path::Path;

use tokio::process::Command;

/// Port the dashboard server always binds; not configurable.
pub const SERVER_PORT: u16 = 8501;
/// Address the dashboard server always binds; not configurable.
pub const SERVER_ADDRESS: &str = "0.0.0.0";

pub struct DashboardCommandConfig<'a> {
    pub streamlit_path: &'a Path,
    pub app_dir: &'a Path,
    pub entry_file: &'a str,
    pub module_search_path: &'a str,
}

/// Build the `streamlit run` command for the dashboard server.
///
/// The augmented `PYTHONPATH` is set on the child only, merged into its
/// inherited environment; the launcher's own environment is never mutated.
pub fn build_dashboard_command(config: DashboardCommandConfig<'_>) -> Command {
    let mut command = Command::new(config.streamlit_path);
    command.kill_on_drop(true);
    command.current_dir(config.app_dir);
    command.env("PYTHONPATH", config.module_search_path);

    command.arg("run").arg(config.entry_file);
    command.arg("--server.port").arg(SERVER_PORT.to_string());
    command.arg("--server.address").arg(SERVER_ADDRESS);

    command
}

/// Compute the child's `PYTHONPATH`: the existing value with the launcher's
/// working directory appended, so the dashboard can import local modules.
pub fn module_search_path(existing: Option<&str>, cwd: &Path) -> String {
    match existing.map(str::trim).filter(|value| !value.is_empty()) {
        Some(existing) => format!("{existing}:{}", cwd.display()),
        None => cwd.display().to_string(),
    }
}
