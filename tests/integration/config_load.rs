use std::path::PathBuf;

use logviz_launcher::{config::LauncherConfig, support::errors::ConfigError};

use crate::common::fixture;

#[test]
fn explicit_config_override_loads_the_named_file() {
    let path = fixture("tests/fixtures/launcher_valid.toml");
    let config = LauncherConfig::load(Some(path.clone())).expect("valid fixture should load");

    assert_eq!(config.source_path, Some(path));
    assert_eq!(config.dashboard.entry_file, "main.py");
    assert!(!config.install.auto_install);
}

#[test]
fn missing_explicit_config_is_a_structured_error() {
    let path = fixture("tests/fixtures/launcher_does_not_exist.toml");
    let error =
        LauncherConfig::load(Some(path.clone())).expect_err("missing override must error");

    match error {
        ConfigError::NotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn defaults_pin_the_historical_launcher_values() {
    let config = LauncherConfig::defaults();

    assert_eq!(config.dashboard.app_dir, PathBuf::from("src/logging/viz"));
    assert_eq!(config.dashboard.entry_file, "app.py");
    assert_eq!(
        config.install.packages,
        vec!["streamlit", "pandas", "plotly"]
    );
}
