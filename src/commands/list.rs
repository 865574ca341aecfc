//! List command implementation

use std::path::PathBuf;

use console::Style;

use crate::error::Result;

/// Run list command
pub fn run(root: Option<PathBuf>, verbose: bool) -> Result<()> {
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

    println!(
        "{}",
        Style::new()
            .bold()
            .cyan()
            .apply_to(format!("待安装补丁 | Pending patches ({}):", patches.len()))
    );
    for patch in &patches {
        println!("{}. {}", patch.index, patch.name);
    }
    Ok(())
}
