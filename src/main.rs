//! Entry point for the dashboard launcher.
use std::process::ExitCode;

use clap::Parser;
use logviz_launcher::{
    cli::{execute_preflight, LaunchProfile, LaunchProfileArgs, ParsedCommand},
    config::LauncherConfig,
    launcher::{self, RuntimeExit, SystemProbe},
    support::telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = LaunchProfileArgs::parse();

    match args.into_command().map_err(RuntimeExit::from_error)? {
        ParsedCommand::RunDashboard(profile) => run_dashboard(profile).await,
        ParsedCommand::Preflight(profile) => run_preflight(profile),
    }
}

async fn run_dashboard(profile: LaunchProfile) -> Result<ExitCode, RuntimeExit> {
    let config =
        LauncherConfig::load(profile.config_path.clone()).map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "logviz::runtime",
        launch_args = ?profile.launch_args,
        "Resolved launch profile"
    );

    let auto_install = config.install.auto_install && !profile.no_install;
    let status = launcher::launch(&config, auto_install)
        .await
        .map_err(RuntimeExit::from_error)?;
    Ok(launcher::exit_code_for(status))
}

fn run_preflight(profile: LaunchProfile) -> Result<ExitCode, RuntimeExit> {
    let config = LauncherConfig::load(profile.config_path).map_err(RuntimeExit::from_error)?;
    let message = execute_preflight(&config, &SystemProbe).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(ExitCode::SUCCESS)
}
