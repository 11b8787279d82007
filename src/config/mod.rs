//! Load and validate launcher configuration.
use std::{env, path::PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::support::errors::ConfigError;

pub mod dashboard;
pub mod install;
pub mod telemetry;

pub use dashboard::{
    parse_dashboard_section, DashboardSection, RawDashboardSection, DEFAULT_APP_DIR,
    DEFAULT_ENTRY_FILE, DEFAULT_STREAMLIT_PATH,
};
pub use install::{
    parse_install_section, InstallSection, RawInstallSection, DEFAULT_PACKAGES, DEFAULT_PIP_PATH,
};

pub const CONFIG_ENV_KEY: &str = "LAUNCHER_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "launcher.toml";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub dashboard: DashboardSection,
    pub install: InstallSection,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    dashboard: Option<RawDashboardSection>,
    install: Option<RawInstallSection>,
}

impl LauncherConfig {
    /// Built-in defaults, used when no configuration file is present.
    pub fn defaults() -> Self {
        Self {
            dashboard: DashboardSection::defaults(),
            install: InstallSection::defaults(),
            source_path: None,
        }
    }

    /// Resolve the configuration source in order: CLI override →
    /// `LAUNCHER_CONFIG_PATH` → `launcher.toml` if present → defaults.
    ///
    /// The historical launcher carried no configuration file, so absence of
    /// the default file is not an error; an explicitly named file must exist.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            telemetry::log_source(&path, "cli");
            if !path.is_file() {
                return Err(ConfigError::NotFound { path });
            }
            return Self::load_from_path(path);
        }

        if let Some(path) = env::var_os(CONFIG_ENV_KEY)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
        {
            telemetry::log_source(&path, "env");
            if !path.is_file() {
                return Err(ConfigError::NotFound { path });
            }
            return Self::load_from_path(path);
        }

        let default = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default.is_file() {
            telemetry::log_source(&default, "default");
            return Self::load_from_path(default);
        }

        telemetry::log_defaults();
        Ok(Self::defaults())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "logviz::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "logviz::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "logviz::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let dashboard = parse_dashboard_section(raw.dashboard, &path)?;
        let install = parse_install_section(raw.install, &path)?;

        Ok(Self {
            dashboard,
            install,
            source_path: Some(path),
        })
    }
}
