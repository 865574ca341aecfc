//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// msubatch - MSU batch patch installer
///
/// Install every MSU update package found in the staging folder, one by one,
/// through the system servicing tool.
#[derive(Parser, Debug)]
#[command(
    name = "msubatch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "MSU batch patch installer | Windows MSU 补丁批量安装工具",
    long_about = "msubatch scans a staging folder for .msu update packages, installs them \
                  sequentially through DISM, moves successes into a Done folder, and records \
                  failures in a per-run log under Log/.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  msubatch install\n    \
                  msubatch install -y\n    \
                  msubatch list\n    \
                  msubatch open"
)]
pub struct Cli {
    /// Staging root folder (defaults to C:\Patches)
    #[arg(long, short = 'r', global = true, env = "MSUBATCH_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install all pending MSU packages from the staging folder
    Install(InstallArgs),

    /// List pending MSU packages without installing anything
    List,

    /// Open the staging folder in the file manager
    Open,

    /// Show version information
    Version,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install after reviewing the pending list:\n    msubatch install\n\n\
                  Install without confirmation:\n    msubatch install -y\n\n\
                  Install from a different staging folder:\n    msubatch install --root D:\\Patches")]
pub struct InstallArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Override the servicing tool executable (testing seam)
    #[arg(long, hide = true, env = "MSUBATCH_SERVICER")]
    pub servicer: Option<PathBuf>,
}
