use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::support::errors::ConfigError;

pub const DEFAULT_PIP_PATH: &str = "pip";
/// Packages installed when the dashboard executable is missing.
pub const DEFAULT_PACKAGES: [&str; 3] = ["streamlit", "pandas", "plotly"];

/// Dependency install settings.
#[derive(Debug, Clone)]
pub struct InstallSection {
    pub pip_path: PathBuf,
    pub packages: Vec<String>,
    pub auto_install: bool,
}

impl InstallSection {
    pub fn defaults() -> Self {
        Self {
            pip_path: PathBuf::from(DEFAULT_PIP_PATH),
            packages: DEFAULT_PACKAGES.iter().map(|pkg| pkg.to_string()).collect(),
            auto_install: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawInstallSection {
    pub pip_path: Option<String>,
    pub packages: Option<Vec<String>>,
    pub auto_install: Option<bool>,
}

pub fn parse_install_section(
    raw: Option<RawInstallSection>,
    path: &Path,
) -> Result<InstallSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let pip_path = raw
        .pip_path
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PIP_PATH));

    let packages = match raw.packages {
        Some(packages) => {
            validate_packages(&packages, path)?;
            packages
        }
        None => DEFAULT_PACKAGES.iter().map(|pkg| pkg.to_string()).collect(),
    };

    Ok(InstallSection {
        pip_path,
        packages,
        auto_install: raw.auto_install.unwrap_or(true),
    })
}

fn validate_packages(packages: &[String], path: &Path) -> Result<(), ConfigError> {
    if packages.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "install.packages",
            message: "Provide at least one package name".into(),
        });
    }

    if packages.iter().any(|pkg| pkg.trim().is_empty()) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "install.packages",
            message: "Package names must not be blank".into(),
        });
    }

    Ok(())
}
