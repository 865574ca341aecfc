//! Command implementations for the msubatch CLI

pub mod install;
pub mod list;
pub mod open;
pub mod version;

use std::path::PathBuf;

use crate::error::{MsubatchError, Result};
use crate::staging::StagingConfig;

/// Resolve the staging root from the global `--root` flag or the platform
/// default.
pub(crate) fn resolve_staging(root: Option<PathBuf>) -> Result<StagingConfig> {
    match root {
        Some(path) => Ok(StagingConfig::new(path)),
        None => StagingConfig::default_root()
            .map(StagingConfig::new)
            .ok_or(MsubatchError::NoStagingRoot),
    }
}
