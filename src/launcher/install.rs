//! Dependency install step.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

use crate::support::errors::LaunchError;

/// Abstraction over the package installer, kept behind a trait so preflight
/// behavior can be pinned without touching a real interpreter.
#[async_trait]
pub trait DependencyInstaller {
    async fn install(&self, pip_path: &Path, packages: &[String]) -> Result<(), LaunchError>;
}

/// Installer that shells out to `pip install`.
pub struct PipInstaller;

#[async_trait]
impl DependencyInstaller for PipInstaller {
    async fn install(&self, pip_path: &Path, packages: &[String]) -> Result<(), LaunchError> {
        info!(
            target: "logviz::launcher",
            pip = %pip_path.display(),
            packages = ?packages,
            "Installing dashboard dependencies"
        );

        let mut command = Command::new(pip_path);
        command.kill_on_drop(true);
        command.arg("install");
        for package in packages {
            command.arg(package);
        }

        let status = command
            .status()
            .await
            .map_err(|err| LaunchError::InstallSpawn {
                command: pip_path.display().to_string(),
                source: err,
            })?;

        if !status.success() {
            return Err(LaunchError::InstallFailed {
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}
