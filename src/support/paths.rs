//! Search-path resolution helpers.

use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Resolve an executable name against a `PATH`-style search path.
///
/// A name that already carries a directory component (relative or absolute)
/// is checked directly and never searched.
pub fn resolve_on_path(name: &Path, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if name.components().count() > 1 {
        return is_executable(name).then(|| name.to_path_buf());
    }

    let search = search_path?;
    env::split_paths(search)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Join a relative path onto a base directory; absolute paths pass through.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
