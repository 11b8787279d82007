//! Shared helpers for integration tests.

use std::{fs, path::Path, path::PathBuf};

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Create the fixed dashboard layout (`src/logging/viz/app.py`) under `root`.
#[allow(dead_code)]
pub fn dashboard_workspace(root: &Path) -> PathBuf {
    let viz_dir = root.join("src/logging/viz");
    fs::create_dir_all(&viz_dir).expect("can create dashboard directory");
    fs::write(viz_dir.join("app.py"), "import streamlit\n").expect("can write entry file");
    viz_dir
}

/// Write a shell script and mark it executable.
#[cfg(unix)]
#[allow(dead_code)]
pub fn write_executable(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, script).expect("can write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("can mark script executable");
    path
}
