//! Common test utilities for msubatch integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary staging root for integration tests
#[allow(dead_code)]
pub struct TestStaging {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path used as --root
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestStaging {
    /// Create a new test staging root (the folder itself is not created;
    /// the binary is expected to scaffold it)
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("Patches");
        Self { temp, root }
    }

    /// Drop a dummy package file into the staging root
    pub fn write_patch(&self, name: &str) {
        std::fs::create_dir_all(&self.root).expect("Failed to create staging root");
        std::fs::write(self.root.join(name), b"payload").expect("Failed to write patch file");
    }

    /// Check if a path relative to the staging root exists
    pub fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }

    /// All run log files under Log/, if any
    pub fn log_files(&self) -> Vec<PathBuf> {
        let log_dir = self.root.join("Log");
        match std::fs::read_dir(&log_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Contents of the single run log of this test, panics if there is not
    /// exactly one
    pub fn read_single_log(&self) -> String {
        let files = self.log_files();
        assert_eq!(files.len(), 1, "expected exactly one run log, got {:?}", files);
        std::fs::read_to_string(&files[0]).expect("Failed to read run log")
    }

    /// Write an executable fake servicing tool script and return its path
    #[cfg(unix)]
    pub fn write_fake_servicer(&self, script_body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.temp.path().join("fake-dism.sh");
        let script = format!("#!/bin/sh\n{}\n", script_body);
        std::fs::write(&path, script).expect("Failed to write fake servicer");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake servicer")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to chmod fake servicer");
        path
    }
}
