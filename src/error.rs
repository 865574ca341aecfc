//! Error types and handling for msubatch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-package installation failures are not errors in this sense: they are
//! classified outcomes (see [`crate::classify`]) that the batch absorbs and
//! logs. The variants here cover the conditions that stop the program:
//! staging folders that cannot be created, a run log that cannot be written,
//! no usable staging root.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for msubatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum MsubatchError {
    // Staging errors
    #[error("Failed to create folder: {path}")]
    #[diagnostic(
        code(msubatch::staging::create_failed),
        help("Check that you have permission to write to the staging root")
    )]
    StagingCreateFailed { path: String, reason: String },

    #[error("Failed to read staging folder: {path}")]
    #[diagnostic(
        code(msubatch::staging::read_failed),
        help("Check that the staging folder exists and is readable")
    )]
    StagingReadFailed { path: String, reason: String },

    #[error("No staging root could be determined")]
    #[diagnostic(
        code(msubatch::staging::no_root),
        help("Pass --root <DIR> or set MSUBATCH_ROOT to choose a staging folder")
    )]
    NoStagingRoot,

    // Run log errors
    #[error("Failed to write run log: {path}")]
    #[diagnostic(code(msubatch::runlog::write_failed))]
    RunLogWriteFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(msubatch::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for MsubatchError {
    fn from(err: std::io::Error) -> Self {
        MsubatchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for MsubatchError {
    fn from(err: inquire::InquireError) -> Self {
        MsubatchError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MsubatchError>;
