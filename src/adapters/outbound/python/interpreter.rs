use crate::shared::error::ChillError;
use crate::shared::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Prints `sys.path` as a JSON array of strings
const SYS_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

const DEFAULT_INTERPRETER: &str = "python3";

/// A Python interpreter queried for its import search path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonInterpreter {
    program: PathBuf,
}

impl PythonInterpreter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Picks the interpreter to probe
    ///
    /// An explicit interpreter wins; otherwise the active virtual environment
    /// (`$VIRTUAL_ENV`) is used, and `python3` from `PATH` as a last resort.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(program) = explicit {
            return Self::new(program);
        }

        if let Some(venv) = env::var_os("VIRTUAL_ENV").filter(|v| !v.is_empty()) {
            let candidate = Self::venv_interpreter(Path::new(&venv));
            if candidate.is_file() {
                debug!("Using virtual environment interpreter {}", candidate.display());
                return Self::new(candidate);
            }
        }

        Self::new(DEFAULT_INTERPRETER)
    }

    fn venv_interpreter(venv: &Path) -> PathBuf {
        if cfg!(windows) {
            venv.join("Scripts").join("python.exe")
        } else {
            venv.join("bin").join("python")
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the interpreter and returns its `sys.path` entries
    ///
    /// Empty entries (the current directory) are dropped.
    ///
    /// # Errors
    /// Returns `ChillError::InterpreterFailed` if the interpreter cannot be
    /// started, exits unsuccessfully, or prints something other than a JSON
    /// list of strings
    pub fn sys_path(&self) -> Result<Vec<PathBuf>> {
        let failed = |details: String| ChillError::InterpreterFailed {
            interpreter: self.program.display().to_string(),
            details,
        };

        debug!("Probing {} for sys.path", self.program.display());
        let output = Command::new(&self.program)
            .args(["-c", SYS_PATH_SCRIPT])
            .output()
            .map_err(|e| failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!("{}: {}", output.status, stderr.trim())).into());
        }

        Self::parse_sys_path(&output.stdout).map_err(|e| failed(e.to_string()).into())
    }

    fn parse_sys_path(stdout: &[u8]) -> Result<Vec<PathBuf>> {
        let entries: Vec<String> = serde_json::from_slice(stdout)?;
        Ok(entries
            .into_iter()
            .filter(|entry| !entry.trim().is_empty())
            .map(PathBuf::from)
            .collect())
    }
}
