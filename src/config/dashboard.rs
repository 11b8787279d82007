use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::support::errors::ConfigError;

pub const DEFAULT_STREAMLIT_PATH: &str = "streamlit";
pub const DEFAULT_APP_DIR: &str = "src/logging/viz";
pub const DEFAULT_ENTRY_FILE: &str = "app.py";

/// Dashboard process settings.
#[derive(Debug, Clone)]
pub struct DashboardSection {
    pub streamlit_path: PathBuf,
    pub app_dir: PathBuf,
    pub entry_file: String,
}

impl DashboardSection {
    pub fn defaults() -> Self {
        Self {
            streamlit_path: PathBuf::from(DEFAULT_STREAMLIT_PATH),
            app_dir: PathBuf::from(DEFAULT_APP_DIR),
            entry_file: DEFAULT_ENTRY_FILE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDashboardSection {
    pub streamlit_path: Option<String>,
    pub app_dir: Option<String>,
    pub entry_file: Option<String>,
}

pub fn parse_dashboard_section(
    raw: Option<RawDashboardSection>,
    path: &Path,
) -> Result<DashboardSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let streamlit_path = raw
        .streamlit_path
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STREAMLIT_PATH));

    let app_dir = raw
        .app_dir
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_DIR));

    let entry_file = raw
        .entry_file
        .unwrap_or_else(|| DEFAULT_ENTRY_FILE.to_string());
    validate_entry_file(&entry_file, path)?;

    Ok(DashboardSection {
        streamlit_path,
        app_dir,
        entry_file,
    })
}

// The entry file is resolved inside app_dir, so it must be a bare file name.
fn validate_entry_file(entry_file: &str, path: &Path) -> Result<(), ConfigError> {
    if entry_file.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "dashboard.entry_file",
            message: "Entry file name must not be empty".into(),
        });
    }

    if Path::new(entry_file).components().count() > 1 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "dashboard.entry_file",
            message: "Entry file must be a bare file name inside app_dir".into(),
        });
    }

    Ok(())
}
