use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument errors exit with 2 from clap itself, before any of these apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Listing produced successfully
    Success = 0,
    /// Application error (environment not found, interpreter failure, file I/O error, etc.)
    ApplicationError = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Application-specific errors raised at the edges of the tool.
///
/// Nothing inside the classification itself is fatal; these variants cover
/// locating the environment, reading configuration and writing output.
#[derive(Debug, Error)]
pub enum ChillError {
    #[error("No Python environment found\nReason: {reason}\n\n💡 Hint: Activate a virtual environment, pass --python, or point --path at a site-packages directory")]
    EnvironmentNotFound { reason: String },

    #[error("Failed to query the Python interpreter: {interpreter}\nDetails: {details}\n\n💡 Hint: Please verify that the interpreter exists and runs")]
    InterpreterFailed { interpreter: String, details: String },

    #[error("Invalid search path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing site-packages directory")]
    InvalidSearchPath { path: PathBuf, reason: String },

    #[error("Failed to read package metadata: {path}\nDetails: {details}")]
    MetadataReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
