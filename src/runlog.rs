//! Per-run failure log
//!
//! One plain-text file per program run under `Log/`, named with the run
//! start timestamp. The file is created lazily on the first failure; a run
//! with no failures leaves no log behind. Lines are append-only, written
//! with a handle that is opened and closed per event, in installation
//! order:
//!
//! `[<index>] <YYYY-MM-DD HH:MM:SS> - <file name> - <message>`

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{MsubatchError, Result};

pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Pick the log path for this run inside `log_dir`. Nothing is written
    /// until the first [`append`](Self::append).
    pub fn create_in(log_dir: &Path) -> Self {
        let file_name = format!("Log_{}.txt", Local::now().format("%Y%m%d_%H%M%S"));
        Self {
            path: log_dir.join(file_name),
        }
    }

    /// Use an exact log path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one failure line, creating the file on first use.
    pub fn append(&self, index: usize, patch_name: &str, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.write_failed(e))?;
        writeln!(file, "[{}] {} - {} - {}", index, timestamp, patch_name, message)
            .map_err(|e| self.write_failed(e))
    }

    /// Whether any failure has been recorded this run.
    pub fn has_entries(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|meta| meta.len() > 0)
            .unwrap_or(false)
    }

    fn write_failed(&self, err: std::io::Error) -> MsubatchError {
        MsubatchError::RunLogWriteFailed {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}
