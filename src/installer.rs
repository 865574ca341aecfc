//! Batch installer
//!
//! Drives one installation attempt per pending package, in discovery order,
//! fully synchronously. Per package the state machine is terminal in one
//! step: Pending → Installing → {Installed, Failed}; there is no retry. A
//! failure is contained to its item: it is classified, reported, logged,
//! and the batch moves on. Successes are relocated into `Done/`; a failed
//! relocation after a successful install is logged as its own "installed
//! but not archived" event instead of aborting the batch.

use crate::classify::classify;
use crate::error::Result;
use crate::runlog::RunLog;
use crate::servicer::Servicer;
use crate::staging::{PatchFile, StagingConfig};

/// Terminal result of one installation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// Installed, but the move into Done/ failed
    InstalledNotArchived,
    Failed,
}

/// Aggregate numbers for one batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub installed: usize,
    pub failed: usize,
    /// Installed successfully but could not be moved into Done/
    pub unarchived: usize,
}

/// Receives per-item progress events from the batch. The installer itself
/// stays headless; the CLI plugs in the indicatif/console display.
pub trait BatchObserver {
    fn on_installing(&self, patch: &PatchFile, total: usize);
    fn on_installed(&self, patch: &PatchFile);
    fn on_failed(&self, patch: &PatchFile, message: &str);
}

pub struct BatchInstaller<'a> {
    staging: &'a StagingConfig,
    servicer: &'a dyn Servicer,
    run_log: &'a RunLog,
}

impl<'a> BatchInstaller<'a> {
    pub fn new(
        staging: &'a StagingConfig,
        servicer: &'a dyn Servicer,
        run_log: &'a RunLog,
    ) -> Self {
        Self {
            staging,
            servicer,
            run_log,
        }
    }

    /// Attempt every package exactly once, in the given order.
    pub fn run(
        &self,
        patches: &[PatchFile],
        observer: &dyn BatchObserver,
    ) -> Result<BatchReport> {
        let mut report = BatchReport::default();
        let total = patches.len();

        for patch in patches {
            observer.on_installing(patch, total);
            report.attempted += 1;
            match self.install_one(patch, observer)? {
                InstallOutcome::Installed => report.installed += 1,
                InstallOutcome::InstalledNotArchived => {
                    report.installed += 1;
                    report.unarchived += 1;
                }
                InstallOutcome::Failed => report.failed += 1,
            }
        }

        Ok(report)
    }

    fn install_one(
        &self,
        patch: &PatchFile,
        observer: &dyn BatchObserver,
    ) -> Result<InstallOutcome> {
        let output = self.servicer.add_package(&patch.path);

        if let Some(kind) = classify(&output) {
            let message = kind.message();
            observer.on_failed(patch, &message);
            self.run_log.append(patch.index, &patch.name, &message)?;
            return Ok(InstallOutcome::Failed);
        }

        match self.staging.move_to_done(patch) {
            Ok(_) => {
                observer.on_installed(patch);
                Ok(InstallOutcome::Installed)
            }
            Err(e) => {
                let message = format!("已安装但未归档 | Installed but not archived: {}", e);
                observer.on_failed(patch, &message);
                self.run_log.append(patch.index, &patch.name, &message)?;
                Ok(InstallOutcome::InstalledNotArchived)
            }
        }
    }
}
