//! Staging folder layout and patch discovery
//!
//! The staging root holds the pending `.msu` packages plus two fixed
//! subfolders: `Done` (successfully installed packages are moved here) and
//! `Log` (one failure log per run). On first creation the root also receives
//! two placeholder README files telling the user where to drop packages.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MsubatchError, Result};

/// File extension of installable packages, matched case-insensitively.
pub const PACKAGE_EXTENSION: &str = "msu";

const README_CN_NAME: &str = "请将需要安装的msu补丁拷贝至本文件夹中.txt";
const README_CN_BODY: &str = "请将需要安装的msu补丁拷贝至本文件夹中。";
const README_EN_NAME: &str = "Please copy the MSU patches you want to install into this folder.txt";
const README_EN_BODY: &str = "Please copy the MSU patches you want to install into this folder.";

/// One pending `.msu` package discovered in the staging root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchFile {
    /// Full path to the package
    pub path: PathBuf,
    /// File name used for display and logging
    pub name: String,
    /// 1-based position in discovery order, stable for the run
    pub index: usize,
}

/// Paths of the staging layout, injected explicitly so tests can point the
/// whole tool at a temporary directory.
#[derive(Debug, Clone)]
pub struct StagingConfig {
    root: PathBuf,
}

impl StagingConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The fixed default staging root: `C:\Patches` on Windows, a `Patches`
    /// folder under the home directory elsewhere (for development).
    pub fn default_root() -> Option<PathBuf> {
        if cfg!(windows) {
            Some(PathBuf::from("C:\\Patches"))
        } else {
            dirs::home_dir().map(|home| home.join("Patches"))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn done_dir(&self) -> PathBuf {
        self.root.join("Done")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join("Log")
    }

    /// Create the staging root (with its two README placeholders) and the
    /// `Log` folder if they are missing. Idempotent; a second call leaves
    /// everything untouched. Creation failure is fatal at startup.
    pub fn ensure_layout(&self) -> Result<()> {
        if !self.root.exists() {
            create_dir(&self.root)?;
            write_placeholder(&self.root.join(README_CN_NAME), README_CN_BODY)?;
            write_placeholder(&self.root.join(README_EN_NAME), README_EN_BODY)?;
        }
        create_dir(&self.log_dir())?;
        Ok(())
    }

    /// Enumerate pending packages in the staging root.
    ///
    /// Files are returned in directory read order as yielded by the OS,
    /// not necessarily sorted. This is the only nondeterministic aspect of
    /// the tool; indices are assigned 1-based in that order and stay stable
    /// for the run. An empty staging root yields an empty list, not an
    /// error.
    pub fn list_pending(&self) -> Result<Vec<PatchFile>> {
        let entries =
            fs::read_dir(&self.root).map_err(|e| MsubatchError::StagingReadFailed {
                path: self.root.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut patches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| MsubatchError::StagingReadFailed {
                path: self.root.display().to_string(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if !path.is_file() || !has_package_extension(&path) {
                continue;
            }
            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };
            patches.push(PatchFile {
                path,
                name,
                index: patches.len() + 1,
            });
        }
        Ok(patches)
    }

    /// Move a package into `Done/` under the same name, creating the folder
    /// if needed. The caller decides how a failed move is reported; it is
    /// never fatal to the batch.
    pub fn move_to_done(&self, patch: &PatchFile) -> std::io::Result<PathBuf> {
        let done = self.done_dir();
        fs::create_dir_all(&done)?;
        let target = done.join(&patch.name);
        fs::rename(&patch.path, &target)?;
        Ok(target)
    }
}

fn has_package_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PACKAGE_EXTENSION))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| MsubatchError::StagingCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn write_placeholder(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).map_err(|e| MsubatchError::StagingCreateFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
