//! Open command implementation
//!
//! Opens the staging folder in the platform file manager so the user can
//! drop packages in. Best-effort UI glue around the core.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{MsubatchError, Result};

/// Run open command
pub fn run(root: Option<PathBuf>) -> Result<()> {
    let staging = super::resolve_staging(root)?;
    staging.ensure_layout()?;
    open_in_file_manager(staging.root())
}

fn open_in_file_manager(path: &Path) -> Result<()> {
    let program = if cfg!(windows) {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    Command::new(program)
        .arg(path)
        .spawn()
        .map_err(|e| MsubatchError::IoError {
            message: format!("failed to open {}: {}", path.display(), e),
        })?;
    Ok(())
}
