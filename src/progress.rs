//! Progress bar and per-item result lines for the batch

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::installer::BatchObserver;
use crate::staging::PatchFile;

/// Progress display for a batch run: one bar across the whole batch plus a
/// colored pass/fail line per package, printed above the bar.
pub struct ProgressDisplay {
    batch_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total package count
    pub fn new(total_packages: u64) -> Self {
        let batch_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let batch_pb = ProgressBar::new(total_packages);
        batch_pb.set_style(batch_style);

        Self { batch_pb }
    }

    /// Finish the bar after the batch completes
    pub fn finish(&self) {
        self.batch_pb.finish_with_message("done");
    }
}

impl BatchObserver for ProgressDisplay {
    fn on_installing(&self, patch: &PatchFile, _total: usize) {
        self.batch_pb
            .set_message(format!("Installing {}", patch.name));
    }

    fn on_installed(&self, patch: &PatchFile) {
        let line = format!("⚪ {}: {} - Successfully installed.", patch.index, patch.name);
        self.batch_pb
            .println(Style::new().green().apply_to(line).to_string());
        self.batch_pb.inc(1);
    }

    fn on_failed(&self, patch: &PatchFile, message: &str) {
        let line = format!("⚪ {}: {} - {}", patch.index, patch.name, message);
        self.batch_pb
            .println(Style::new().red().apply_to(line).to_string());
        self.batch_pb.inc(1);
    }
}
