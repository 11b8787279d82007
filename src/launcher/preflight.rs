//! Pre-launch checks: dependency resolution, conditional install, and
//! dashboard directory preconditions.

use std::{io::Write, path::PathBuf};

use tracing::{info, warn};

use crate::{
    config::LauncherConfig,
    support::{errors::LaunchError, paths},
};

use super::{command, install::DependencyInstaller, probe::LaunchProbe};

/// Notice printed before the automatic dependency install.
pub const INSTALL_NOTICE: &str = "streamlit not found; installing dashboard dependencies...";

/// Everything the launch step needs, resolved up front.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    pub streamlit_path: PathBuf,
    pub app_dir: PathBuf,
    pub entry_file: String,
    pub module_search_path: String,
    pub installed_dependencies: bool,
}

/// Resolve a launch plan or fail before the server is ever spawned.
///
/// User-facing notices go to `out`. The historical launcher changed
/// directory without checking the target and let the launch fail downstream;
/// here a missing dashboard directory or entry file aborts with a structured
/// error instead.
pub async fn prepare_launch(
    config: &LauncherConfig,
    probe: &dyn LaunchProbe,
    installer: &dyn DependencyInstaller,
    auto_install: bool,
    out: &mut dyn Write,
) -> Result<LaunchPlan, LaunchError> {
    let cwd = probe
        .current_dir()
        .map_err(|source| LaunchError::CurrentDirUnavailable { source })?;

    let mut installed_dependencies = false;
    let streamlit_path = match probe.resolve_executable(&config.dashboard.streamlit_path) {
        Some(path) => path,
        None if auto_install => {
            let _ = writeln!(out, "{INSTALL_NOTICE}");
            warn!(
                target: "logviz::launcher",
                streamlit = %config.dashboard.streamlit_path.display(),
                "Dashboard executable not found on the search path"
            );
            installer
                .install(&config.install.pip_path, &config.install.packages)
                .await?;
            installed_dependencies = true;
            // A fresh install may land outside the current search path; fall
            // back to the configured name and let the spawn surface failures.
            probe
                .resolve_executable(&config.dashboard.streamlit_path)
                .unwrap_or_else(|| config.dashboard.streamlit_path.clone())
        }
        None => {
            return Err(LaunchError::DependencyMissing {
                name: config.dashboard.streamlit_path.clone(),
            })
        }
    };

    let app_dir = paths::absolutize(&config.dashboard.app_dir, &cwd);
    if !app_dir.is_dir() {
        return Err(LaunchError::AppDirMissing { path: app_dir });
    }

    let entry_path = app_dir.join(&config.dashboard.entry_file);
    if !entry_path.is_file() {
        return Err(LaunchError::EntryFileMissing { path: entry_path });
    }

    let module_search_path = command::module_search_path(probe.module_path().as_deref(), &cwd);

    info!(
        target: "logviz::launcher",
        streamlit = %streamlit_path.display(),
        app_dir = %app_dir.display(),
        installed_dependencies,
        "Launch plan resolved"
    );

    Ok(LaunchPlan {
        streamlit_path,
        app_dir,
        entry_file: config.dashboard.entry_file.clone(),
        module_search_path,
        installed_dependencies,
    })
}
