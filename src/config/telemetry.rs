use tracing::{debug, info};

use super::{LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &std::path::Path, source: &'static str) {
    info!(
        target: "logviz::config",
        path = %path.display(),
        source = source,
        "Loading launcher configuration"
    );
}

pub fn log_defaults() {
    debug!(
        target: "logviz::config",
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "logviz::config",
        path = %config
            .source_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        streamlit_path = %config.dashboard.streamlit_path.display(),
        app_dir = %config.dashboard.app_dir.display(),
        entry_file = %config.dashboard.entry_file,
        packages = config.install.packages.len(),
        auto_install = config.install.auto_install,
        "Configuration file loaded successfully"
    );
}
