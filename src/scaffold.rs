use std::fs;

use camino::Utf8Path;
use tracing::debug;

use crate::errors::ScaffoldError;

/// Marker file name recognized by git conventions for keeping an empty
/// directory in the tracked tree.
pub const MARKER_FILE: &str = ".gitkeep";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

/// Per-path outcome of a `materialize` call, keyed by the relative path
/// from the tree definition.
#[derive(Debug)]
pub struct DirReport<'a> {
    pub path: &'a str,
    pub status: DirStatus,
}

/// Ensure every listed directory exists under `root`, creating missing
/// intermediate parents along the way. Idempotent: a second run reports
/// every path as `AlreadyExists`. A listed path that exists as a
/// non-directory aborts with `PathConflict`.
pub fn materialize<'a>(
    root: &Utf8Path,
    paths: &[&'a str],
) -> Result<Vec<DirReport<'a>>, ScaffoldError> {
    let mut reports = Vec::with_capacity(paths.len());
    for &rel in paths {
        let target = root.join(rel);
        let status = if target.exists() {
            if !target.is_dir() {
                return Err(ScaffoldError::PathConflict { path: target });
            }
            DirStatus::AlreadyExists
        } else {
            fs::create_dir_all(&target)
                .map_err(|e| ScaffoldError::io("creating directory", target.clone(), e))?;
            debug!(path = %target, "created directory");
            DirStatus::Created
        };
        reports.push(DirReport { path: rel, status });
    }
    Ok(reports)
}

/// Drop a zero-byte marker file into each listed directory that exists
/// and is empty, so git keeps tracking it. Directories that are missing
/// or hold any entry (including a marker from an earlier run) are left
/// alone. Returns the relative paths that received a marker.
pub fn seed_markers<'a>(root: &Utf8Path, paths: &[&'a str]) -> Result<Vec<&'a str>, ScaffoldError> {
    let mut seeded = Vec::new();
    for &rel in paths {
        let target = root.join(rel);
        if !target.is_dir() || !is_empty_dir(&target)? {
            continue;
        }
        let marker = target.join(MARKER_FILE);
        fs::write(&marker, b"")
            .map_err(|e| ScaffoldError::io("writing marker file", marker.clone(), e))?;
        debug!(path = %marker, "seeded marker file");
        seeded.push(rel);
    }
    Ok(seeded)
}

fn is_empty_dir(path: &Utf8Path) -> Result<bool, ScaffoldError> {
    let mut entries = path
        .read_dir_utf8()
        .map_err(|e| ScaffoldError::io("reading directory", path.to_path_buf(), e))?;
    Ok(entries.next().is_none())
}
