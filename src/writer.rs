//! Output file writing.
//! Mirrors each selected file under the output root and applies the
//! permission rules for templated and binary files.

use crate::error::{Error, Result};
use crate::selector::SelectedFile;
use crate::transform::Transformed;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Mode given to templated text files.
pub const TEXT_FILE_MODE: u32 = 0o644;

/// Mode given to directories created under the output root.
pub const DIR_MODE: u32 = 0o755;

/// Computes `output_root/relative_path` with `append_extension` added to the
/// file name.
pub fn destination_path<P: AsRef<Path>, Q: AsRef<Path>>(
    output_root: P,
    relative_path: Q,
    append_extension: &str,
) -> PathBuf {
    let mut target = output_root.as_ref().join(relative_path).into_os_string();
    target.push(append_extension);
    PathBuf::from(target)
}

fn filesystem_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::FilesystemError {
        path: path.display().to_string(),
        source,
    }
}

/// Creates `path` and any missing parents.
pub fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(filesystem_error(path))
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(filesystem_error(path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Writes transformed files below a fixed output root.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_root: PathBuf,
    append_extension: String,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(output_root: P, append_extension: impl Into<String>) -> Self {
        Self {
            output_root: output_root.into(),
            append_extension: append_extension.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn destination(&self, file: &SelectedFile) -> PathBuf {
        destination_path(&self.output_root, &file.relative_path, &self.append_extension)
    }

    /// Writes `content` for `file` and returns the destination path.
    ///
    /// An existing destination is replaced. Binary files keep the source
    /// mode, templated files get [`TEXT_FILE_MODE`].
    ///
    /// # Errors
    /// * `Error::FilesystemError` if a directory or the file cannot be written
    pub fn write(&self, file: &SelectedFile, content: &Transformed) -> Result<PathBuf> {
        let target = self.destination(file);
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        // A previous run may have left a read-only copy behind.
        if fs::symlink_metadata(&target).is_ok() {
            fs::remove_file(&target).map_err(filesystem_error(&target))?;
        }

        debug!("Writing {} bytes to {}", content.bytes.len(), target.display());
        fs::write(&target, &content.bytes).map_err(filesystem_error(&target))?;

        let mode = if content.templated {
            TEXT_FILE_MODE
        } else {
            file.mode
        };
        set_mode(&target, mode)?;

        Ok(target)
    }
}
