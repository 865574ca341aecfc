//! Servicing tool invocation
//!
//! The external servicing tool (DISM) is the only process this tool spawns.
//! It exposes no structured error channel, so the wrapper reduces every
//! invocation to an exit code plus the combined diagnostic text, and the
//! [`Servicer`] trait lets tests substitute a fake without spawning
//! anything.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Raw result of one servicing invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicingOutput {
    /// Process exit code; 0 means the package was installed
    pub exit_code: i32,
    /// Combined stdout and stderr of the tool, verbatim
    pub diagnostic: String,
}

impl ServicingOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Installs one package into the live system.
pub trait Servicer {
    /// Run the servicing tool synchronously against a single package and
    /// report its raw outcome. Blocks until the tool exits; there is no
    /// timeout.
    fn add_package(&self, package: &Path) -> ServicingOutput;
}

/// The real servicing tool: `dism /online /add-package /packagepath:<file>`.
pub struct Dism {
    program: PathBuf,
}

impl Dism {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("dism"),
        }
    }

    /// Use a different executable in place of `dism` (testing seam).
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Dism {
    fn default() -> Self {
        Self::new()
    }
}

impl Servicer for Dism {
    fn add_package(&self, package: &Path) -> ServicingOutput {
        let result = Command::new(&self.program)
            .arg("/online")
            .arg("/add-package")
            .arg(format!("/packagepath:{}", package.display()))
            .output();

        match result {
            Ok(output) => {
                let mut diagnostic = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stderr.trim().is_empty() {
                    if !diagnostic.is_empty() {
                        diagnostic.push('\n');
                    }
                    diagnostic.push_str(stderr.trim_end());
                }
                ServicingOutput {
                    // Killed by signal: no exit code, fold into the
                    // unclassifiable bucket
                    exit_code: output.status.code().unwrap_or(-1),
                    diagnostic,
                }
            }
            // The tool could not be launched at all. Contained per item,
            // like any other failure.
            Err(e) => ServicingOutput {
                exit_code: -1,
                diagnostic: format!("failed to launch {}: {}", self.program.display(), e),
            },
        }
    }
}
