//! Dashboard launch orchestration: preflight, install, command, run.

use std::{
    io::{self, Write},
    process::ExitStatus,
};

use uuid::Uuid;

use crate::{
    config::LauncherConfig,
    support::{errors::LaunchError, telemetry::LaunchSpan},
};

pub mod command;
pub mod install;
pub mod preflight;
pub mod probe;
pub mod run;

pub use command::{build_dashboard_command, module_search_path, SERVER_ADDRESS, SERVER_PORT};
pub use install::{DependencyInstaller, PipInstaller};
pub use preflight::{prepare_launch, LaunchPlan, INSTALL_NOTICE};
pub use probe::{LaunchProbe, SystemProbe};
pub use run::{exit_code_for, run_dashboard, RuntimeExit};

/// Banner printed before any pre-flight work.
pub const START_BANNER: &str = "Starting log visualization dashboard...";
/// Banner printed only after the dashboard server has exited.
pub const STOPPED_BANNER: &str = "Dashboard stopped.";

/// Run the whole launch sequence against the real environment.
pub async fn launch(
    config: &LauncherConfig,
    auto_install: bool,
) -> Result<ExitStatus, LaunchError> {
    launch_with(
        config,
        &SystemProbe,
        &PipInstaller,
        auto_install,
        &mut io::stdout(),
    )
    .await
}

/// Launch sequence with injectable collaborators.
///
/// Banners and notices are written to `out`; the stopped banner is written
/// only once the server's exit status has been observed.
pub async fn launch_with(
    config: &LauncherConfig,
    probe: &dyn LaunchProbe,
    installer: &dyn DependencyInstaller,
    auto_install: bool,
    out: &mut dyn Write,
) -> Result<ExitStatus, LaunchError> {
    let _ = writeln!(out, "{START_BANNER}");

    let plan = prepare_launch(config, probe, installer, auto_install, out).await?;

    let span = LaunchSpan::start(Uuid::new_v4());
    match run_dashboard(&plan).await {
        Ok(status) => {
            let outcome = if status.success() { "succeeded" } else { "failed" };
            span.finish(outcome, status.code());
            let _ = writeln!(out, "{STOPPED_BANNER}");
            Ok(status)
        }
        Err(err) => {
            span.finish("error", None);
            Err(err)
        }
    }
}
