//! Foreground execution of the dashboard server.

use std::process::{ExitCode, ExitStatus};

use anyhow::Error;
use tracing::info;

use crate::support::errors::LaunchError;

use super::{
    command::{self, DashboardCommandConfig, SERVER_ADDRESS, SERVER_PORT},
    preflight::LaunchPlan,
};

/// Bundles a runtime error message with a process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Map the dashboard server's exit status onto the launcher's own exit code.
pub fn exit_code_for(status: ExitStatus) -> ExitCode {
    ExitCode::from(exit_byte(status))
}

fn exit_byte(status: ExitStatus) -> u8 {
    if status.success() {
        return 0;
    }
    match status.code() {
        Some(code) => code.clamp(1, 255) as u8,
        // Killed by a signal; there is no code to propagate.
        None => 1,
    }
}

/// Spawn the planned dashboard command and wait for it in the foreground.
///
/// An interrupt reaches the server through the shared process group; the
/// launcher keeps waiting so callers always observe the server's exit before
/// reporting anything.
pub async fn run_dashboard(plan: &LaunchPlan) -> Result<ExitStatus, LaunchError> {
    let mut command = command::build_dashboard_command(DashboardCommandConfig {
        streamlit_path: &plan.streamlit_path,
        app_dir: &plan.app_dir,
        entry_file: &plan.entry_file,
        module_search_path: &plan.module_search_path,
    });

    info!(
        target: "logviz::runtime",
        streamlit = %plan.streamlit_path.display(),
        app_dir = %plan.app_dir.display(),
        entry_file = %plan.entry_file,
        port = SERVER_PORT,
        address = SERVER_ADDRESS,
        "Starting dashboard server"
    );

    let mut child = command.spawn().map_err(|err| LaunchError::ServerSpawn {
        command: plan.streamlit_path.display().to_string(),
        source: err,
    })?;

    let wait = child.wait();
    tokio::pin!(wait);
    let status = loop {
        tokio::select! {
            status = &mut wait => {
                break status.map_err(|source| LaunchError::ServerWait { source })?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!(
                    target: "logviz::runtime",
                    "Interrupt received; waiting for the dashboard server to exit"
                );
            }
        }
    };

    info!(
        target: "logviz::runtime",
        exit_code = status.code(),
        "Dashboard server exited"
    );

    Ok(status)
}
