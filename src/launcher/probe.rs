use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::support::paths;

/// Abstraction for environment access during launch preparation.
pub trait LaunchProbe {
    fn resolve_executable(&self, name: &Path) -> Option<PathBuf>;
    fn current_dir(&self) -> io::Result<PathBuf>;
    /// Current `PYTHONPATH` value, if any.
    fn module_path(&self) -> Option<String>;
}

/// Probe that operates against the real environment.
pub struct SystemProbe;

impl LaunchProbe for SystemProbe {
    fn resolve_executable(&self, name: &Path) -> Option<PathBuf> {
        paths::resolve_on_path(name, env::var_os("PATH").as_deref())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn module_path(&self) -> Option<String> {
        env::var("PYTHONPATH").ok()
    }
}
