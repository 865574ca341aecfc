//! Install command implementation
//!
//! Thin CLI wrapper around the batch installer: ensure the staging layout,
//! show the pending list, confirm, run the batch with the progress display
//! attached, then summarize and point at the run log when failures were
//! recorded.

use std::path::PathBuf;

use console::Style;
use inquire::Confirm;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::{BatchInstaller, BatchReport};
use crate::progress::ProgressDisplay;
use crate::runlog::RunLog;
use crate::servicer::Dism;
use crate::staging::PatchFile;

/// Run install command
pub fn run(root: Option<PathBuf>, verbose: bool, args: InstallArgs) -> Result<()> {
    let staging = super::resolve_staging(root)?;
    staging.ensure_layout()?;
    if verbose {
        println!("Staging root: {}", staging.root().display());
    }

    let patches = staging.list_pending()?;
    if patches.is_empty() {
        println!(
            "{}",
            Style::new().bold().red().apply_to(
                "未找到 MSU 文件，请将文件拷贝到文件夹中 | No MSU files found. Please copy the files into the folder."
            )
        );
        return Ok(());
    }

    show_pending(&patches);

    if !args.yes && !confirm_start()? {
        println!("已取消 | Cancelled.");
        return Ok(());
    }

    let run_log = RunLog::create_in(&staging.log_dir());
    let servicer = match args.servicer {
        Some(program) => Dism::with_program(program),
        None => Dism::new(),
    };
    let installer = BatchInstaller::new(&staging, &servicer, &run_log);
    let progress = ProgressDisplay::new(patches.len() as u64);

    let report = installer.run(&patches, &progress)?;
    progress.finish();

    show_summary(&report);
    if run_log.has_entries() {
        println!(
            "失败详情见日志 | Failures were logged to: {}",
            run_log.path().display()
        );
    }
    Ok(())
}

fn show_pending(patches: &[PatchFile]) {
    println!(
        "{}",
        Style::new()
            .bold()
            .cyan()
            .apply_to("以下补丁将被安装 | The following patches will be installed:")
    );
    for patch in patches {
        println!("{}. {}", patch.index, patch.name);
    }
}

fn confirm_start() -> Result<bool> {
    let confirmed = Confirm::new("开始安装? | Start installation?")
        .with_default(true)
        .prompt()?;
    Ok(confirmed)
}

fn show_summary(report: &BatchReport) {
    println!(
        "{}",
        Style::new()
            .bold()
            .green()
            .apply_to("安装完成 | Installation complete.")
    );
    println!(
        "  {} attempted, {} installed, {} failed",
        report.attempted, report.installed, report.failed
    );
    if report.unarchived > 0 {
        println!(
            "  {} installed but left in place (could not be moved to Done)",
            report.unarchived
        );
    }
}
