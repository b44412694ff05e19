//! Run orchestration: resolve replacements, select files, then transform and
//! write them one at a time.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    cli::Args,
    config::{resolve_replacements, ReplacementSet},
    error::{Error, Result},
    selector::{select_files, SelectedFile},
    transform::transform,
    writer::{create_dir_all, OutputWriter},
};

/// What happened to a processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// UTF-8 text with the replacements applied
    Templated,
    /// Binary content copied byte for byte
    Copied,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Templated => write!(f, "Created file with replacements"),
            FileAction::Copied => write!(f, "Copied binary file"),
        }
    }
}

#[derive(Debug)]
pub struct ProcessResult {
    pub action: FileAction,
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Counts of processed files, by action.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub templated: usize,
    pub copied: usize,
}

pub struct Processor<'a> {
    replacements: &'a ReplacementSet,
    source_root: &'a Path,
    writer: &'a OutputWriter,
}

impl<'a> Processor<'a> {
    pub fn new(
        replacements: &'a ReplacementSet,
        source_root: &'a Path,
        writer: &'a OutputWriter,
    ) -> Self {
        Self {
            replacements,
            source_root,
            writer,
        }
    }

    /// Reads, transforms and writes a single file.
    pub fn process(&self, file: &SelectedFile) -> Result<ProcessResult> {
        let source = self.source_root.join(&file.relative_path);
        let bytes = fs::read(&source).map_err(|e| Error::FilesystemError {
            path: source.display().to_string(),
            source: e,
        })?;

        let transformed = transform(bytes, self.replacements);
        if transformed.templated {
            println!("Applying replacements to {}", file.relative_path.display());
        }
        let target = self.writer.write(file, &transformed)?;

        let action = if transformed.templated {
            FileAction::Templated
        } else {
            FileAction::Copied
        };
        Ok(ProcessResult {
            action,
            source,
            target,
        })
    }
}

/// Runs the whole pipeline against the current working directory.
pub fn run(args: &Args) -> Result<Summary> {
    let base_dir = std::env::current_dir()?;
    run_in(args, &base_dir)
}

/// Runs the whole pipeline with globs and the output root resolved against
/// `base_dir`.
///
/// # Flow
/// 1. Resolves the replacements, failing before any file is touched
/// 2. Selects the input files
/// 3. Creates the output root
/// 4. Transforms and writes each file in order, stopping at the first error
pub fn run_in(args: &Args, base_dir: &Path) -> Result<Summary> {
    let config_file = args.config_file.as_ref().map(|path| base_dir.join(path));
    let replacements = resolve_replacements(args.replace.as_deref(), config_file.as_deref())?;
    info!("Using {} replacement(s)", replacements.len());

    let files = select_files(base_dir, &args.input, &args.exclude)?;
    debug!("Selected {} file(s)", files.len());

    let writer = OutputWriter::new(base_dir.join(&args.output), args.append_extension.as_str());
    create_dir_all(writer.output_root())?;

    let processor = Processor::new(&replacements, base_dir, &writer);
    let mut summary = Summary::default();
    for file in &files {
        let result = processor.process(file)?;
        match result.action {
            FileAction::Templated => summary.templated += 1,
            FileAction::Copied => summary.copied += 1,
        }
        println!("{} {}", result.action, result.target.display());
    }

    println!(
        "Templatized {} file(s) and copied {} binary file(s) into {}.",
        summary.templated,
        summary.copied,
        writer.output_root().display()
    );
    Ok(summary)
}
