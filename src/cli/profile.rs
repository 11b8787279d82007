//! LaunchProfile and config-path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub config_path: Option<PathBuf>,
    pub no_install: bool,
    pub launch_args: Vec<String>,
}

/// Absolutize a CLI-provided config override against the current directory.
pub fn resolve_config_override(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = override_path else {
        return Ok(None);
    };

    if path.is_absolute() {
        return Ok(Some(path));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(Some(cwd.join(path)))
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(config: Option<&Path>, no_install: bool) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(config) = config {
        args.push(format!("--config={}", config.display()));
    }
    if no_install {
        args.push("--no-install".to_string());
    }
    args
}
