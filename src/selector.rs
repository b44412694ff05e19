//! Input file selection.
//! Expands the `--input` and `--exclude` globs against the filesystem and
//! returns the regular files that match the first and not the second.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use log::debug;
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Permission bits reported on platforms without Unix modes.
#[cfg(not(unix))]
const DEFAULT_FILE_MODE: u32 = 0o644;

/// A filesystem entry matched by the include pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Path relative to the scan root
    pub relative_path: PathBuf,
    /// Permission bits of the source file
    pub mode: u32,
    pub is_dir: bool,
}

/// Compiles a glob where `*` and `?` stop at path separators.
///
/// # Errors
/// * `Error::GlobError` for malformed patterns
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(normalize_pattern(pattern))
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::GlobError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

fn normalize_pattern(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

fn has_glob_meta(segment: &str) -> bool {
    segment.contains(['*', '?', '[', ']', '{', '}', '\\'])
}

/// Returns the leading directories of `pattern` that contain no glob
/// metacharacters. Walking starts there instead of at the scan root.
pub fn literal_prefix(pattern: &str) -> PathBuf {
    let pattern = normalize_pattern(pattern);
    let mut segments: Vec<&str> = pattern.split('/').collect();
    // The final segment names files, never a directory to descend from.
    segments.pop();

    segments
        .into_iter()
        .take_while(|segment| !has_glob_meta(segment))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect()
}

#[cfg(unix)]
fn file_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn file_mode(_metadata: &Metadata) -> u32 {
    DEFAULT_FILE_MODE
}

/// Walks `root` and returns every entry matching `input` and not `exclude`,
/// directories excluded, sorted by relative path.
///
/// # Errors
/// * `Error::GlobError` if a pattern does not compile
/// * `Error::FilesystemError` if any part of the tree cannot be read
pub fn select_files<P: AsRef<Path>>(
    root: P,
    input: &str,
    exclude: &str,
) -> Result<Vec<SelectedFile>> {
    let root = root.as_ref();
    let include = compile_glob(input)?;
    let exclude = compile_glob(exclude)?;

    let walk_root = root.join(literal_prefix(input));
    if !walk_root.exists() {
        debug!("Nothing to scan, {} does not exist", walk_root.display());
        return Ok(Vec::new());
    }

    let mut selected = Vec::new();
    for entry in WalkDir::new(&walk_root) {
        let entry = entry.map_err(|e| Error::FilesystemError {
            path: e.path().unwrap_or(&walk_root).display().to_string(),
            source: e.into(),
        })?;

        let relative_path = match entry.path().strip_prefix(root) {
            Ok(path) if path.components().next().is_some() => path,
            _ => continue,
        };
        if !include.is_match(relative_path) || exclude.is_match(relative_path) {
            continue;
        }

        // Follows symlinks so a link to a directory is dropped like one.
        let metadata = fs::metadata(entry.path()).map_err(|e| Error::FilesystemError {
            path: entry.path().display().to_string(),
            source: e,
        })?;
        let file = SelectedFile {
            relative_path: relative_path.to_path_buf(),
            mode: file_mode(&metadata),
            is_dir: metadata.is_dir(),
        };

        if file.is_dir {
            debug!("Skipping directory {}", file.relative_path.display());
            continue;
        }
        debug!("Selected {}", file.relative_path.display());
        selected.push(file);
    }

    selected.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(selected)
}
