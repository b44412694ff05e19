//! Command-line interface implementation for templatizr.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for templatizr.
#[derive(Parser, Debug)]
#[command(author, version, about = "templatizr: convert source files into scaffold templates", long_about = None)]
pub struct Args {
    /// Glob for the input files, relative to the current directory
    #[arg(long, value_name = "GLOB")]
    pub input: String,

    /// Glob for files to exclude
    #[arg(long, value_name = "GLOB")]
    pub exclude: String,

    /// Base path for output files
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,

    /// Replacement patterns, eg /foo/bar/,/baz/bat/ will replace foo with bar and baz with bat.
    /// Overrides the replacements of --config-file when both are given.
    #[arg(long, value_name = "PATTERNS")]
    pub replace: Option<String>,

    /// JSON or YAML file holding a `replacements` list of {search, replace} entries
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Extra file extension to append to created files
    #[arg(long, value_name = "EXT", default_value = "")]
    pub append_extension: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(err) = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                {
                    eprintln!("{}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
