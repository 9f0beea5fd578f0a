use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use tracing::debug;

use crate::cli::Cli;
use crate::scaffold::{self, DirStatus, MARKER_FILE};
use crate::tree::DIRECTORY_STRUCTURE;

const RULE: &str = "------------------------------------------------------------";

pub fn run(_cli: Cli) -> Result<()> {
    let root = resolve_root()?;
    debug!(root = %root, "resolved project root");

    println!("[*] Creating project directory structure...");
    println!("[*] Project root: {root}");
    println!("{RULE}");

    let reports = scaffold::materialize(&root, DIRECTORY_STRUCTURE)?;
    let mut created = 0usize;
    for report in &reports {
        match report.status {
            DirStatus::Created => {
                created += 1;
                println!("[+] Created: {}", report.path);
            }
            DirStatus::AlreadyExists => println!("[=] Exists: {}", report.path),
        }
    }

    println!("{RULE}");
    println!("[*] Created {created} new directories");
    println!("{RULE}");
    println!("[*] Adding {MARKER_FILE} files to empty directories...");
    for path in scaffold::seed_markers(&root, DIRECTORY_STRUCTURE)? {
        println!("[{MARKER_FILE}] Created in: {path}");
    }

    println!("{RULE}");
    println!("[*] Directory structure setup complete!");
    Ok(())
}

/// The managed tree lives two levels above the installed binary
/// (`<root>/tools/bin/treekeep` -> `<root>`), so the root never depends
/// on the directory the tool happens to be invoked from.
fn resolve_root() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let root = exe
        .ancestors()
        .nth(2)
        .context("executable has no grandparent directory")?
        .to_path_buf();
    Utf8PathBuf::from_path_buf(root)
        .map_err(|p| anyhow!("project root is not valid UTF-8: {}", p.display()))
}
