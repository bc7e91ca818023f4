use super::PythonInterpreter;
use crate::shared::error::ChillError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory names that hold installed distributions
const REGISTRY_DIR_NAMES: &[&str] = &["site-packages", "dist-packages"];

/// Where to look for installed distributions
///
/// `registry_dirs` are enumerated for `*.dist-info` / `*.egg-info` entries;
/// `legacy_dirs` are scanned for `*.egg-link` files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    pub registry_dirs: Vec<PathBuf>,
    pub legacy_dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Uses explicitly given site-packages directories for both roles
    ///
    /// # Errors
    /// Returns `ChillError::InvalidSearchPath` for a path that does not exist,
    /// is a symbolic link, or is not a directory
    pub fn explicit(paths: Vec<PathBuf>) -> Result<Self> {
        for path in &paths {
            validate_search_path(path)?;
        }

        Ok(Self {
            registry_dirs: paths.clone(),
            legacy_dirs: paths,
        })
    }

    /// Splits an interpreter's `sys.path` into the two roles
    ///
    /// # Errors
    /// Returns `ChillError::EnvironmentNotFound` when no existing
    /// site-packages directory is on the path
    pub fn from_sys_path(entries: Vec<PathBuf>) -> Result<Self> {
        let mut paths = Self::default();

        for entry in entries {
            if !entry.is_dir() || paths.legacy_dirs.contains(&entry) {
                continue;
            }
            if is_registry_dir(&entry) {
                paths.registry_dirs.push(entry.clone());
            }
            paths.legacy_dirs.push(entry);
        }

        if paths.registry_dirs.is_empty() {
            return Err(ChillError::EnvironmentNotFound {
                reason: "sys.path contains no site-packages directory".to_string(),
            }
            .into());
        }

        debug!(
            "Using {} registry and {} legacy search path(s)",
            paths.registry_dirs.len(),
            paths.legacy_dirs.len()
        );
        Ok(paths)
    }

    /// Asks the interpreter for its `sys.path`
    pub fn discover(interpreter: &PythonInterpreter) -> Result<Self> {
        Self::from_sys_path(interpreter.sys_path()?)
    }
}

fn is_registry_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| REGISTRY_DIR_NAMES.contains(&name))
}

fn validate_search_path(path: &Path) -> Result<()> {
    let invalid = |reason: &str| ChillError::InvalidSearchPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let metadata = fs::symlink_metadata(path).map_err(|_| invalid("Directory does not exist"))?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Search path is a symbolic link. For security reasons, symbolic links are not allowed.",
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory").into());
    }

    Ok(())
}
