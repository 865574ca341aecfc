//! msubatch - MSU batch patch installer
//!
//! Scans a staging folder for Windows `.msu` update packages, installs each
//! one through the system servicing tool (DISM), moves successes into a
//! `Done` folder and records failures in a per-run log under `Log/`.

use clap::Parser;

mod classify;
mod cli;
mod commands;
mod error;
mod installer;
mod progress;
mod runlog;
mod servicer;
mod staging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.root, cli.verbose, args),
        Commands::List => commands::list::run(cli.root, cli.verbose),
        Commands::Open => commands::open::run(cli.root),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
