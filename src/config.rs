//! Replacement configuration for templatizr.
//! Resolves the ordered list of (search, replace) pairs either from the
//! inline `--replace` flag or from a JSON/YAML config file.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// A literal substring substitution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub search: String,
    /// Defaults to empty, which deletes every match
    #[serde(default)]
    pub replace: String,
}

impl Replacement {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// Ordered, non-empty list of replacements applied to every text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSet(Vec<Replacement>);

impl ReplacementSet {
    /// Wraps `replacements`, returning `None` when the list is empty.
    pub fn new(replacements: Vec<Replacement>) -> Option<Self> {
        if replacements.is_empty() {
            None
        } else {
            Some(Self(replacements))
        }
    }

    pub fn as_slice(&self) -> &[Replacement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// On-disk layout of a config file.
///
/// ```yaml
/// replacements:
///   - search: my-project
///     replace: "<%= name %>"
/// ```
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub replacements: Vec<Replacement>,
}

/// Parses the inline `/search/replace/,/search/replace/` syntax.
///
/// Each comma separated token loses its first and last character, and the
/// remainder must split on `/` into exactly two parts with a non-empty search.
pub fn parse_replace_flag(replace: &str) -> Result<Vec<Replacement>> {
    replace.split(',').map(parse_replace_token).collect()
}

fn parse_replace_token(token: &str) -> Result<Replacement> {
    let invalid = |reason: &str| Error::InvalidReplacementSyntax {
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = token.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(invalid("expected the form /search/replace/"));
    }

    let parts: Vec<&str> = chars.as_str().split('/').collect();
    match parts.as_slice() {
        [search, _] if search.is_empty() => Err(invalid("search string is empty")),
        [search, replace] => Ok(Replacement::new(*search, *replace)),
        _ => Err(invalid(&format!(
            "expected 2 parts separated by '/', found {}",
            parts.len()
        ))),
    }
}

/// Parses config file content, trying JSON first and falling back to YAML.
pub fn parse_config(content: &str, path: &Path) -> Result<Vec<Replacement>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let config: ConfigFile = match serde_json::from_str(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content).map_err(|e| Error::ConfigParseError {
            path: path.display().to_string(),
            reason: format!("Invalid configuration format: {}", e),
        })?,
    };

    if let Some(index) = config.replacements.iter().position(|r| r.search.is_empty()) {
        return Err(Error::ConfigParseError {
            path: path.display().to_string(),
            reason: format!("replacement #{} has an empty search string", index + 1),
        });
    }

    Ok(config.replacements)
}

/// Reads and parses a config file.
///
/// # Errors
/// * `Error::ConfigParseError` if the file is unreadable or malformed
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Vec<Replacement>> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigParseError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Determines the active replacements.
///
/// The config file is always loaded when given, so a broken file is reported
/// even if it ends up unused. A non-empty inline flag then replaces its
/// entries entirely.
///
/// # Errors
/// * `Error::RequiredFlags` if neither source yields a replacement
pub fn resolve_replacements(
    replace: Option<&str>,
    config_file: Option<&Path>,
) -> Result<ReplacementSet> {
    let mut replacements = Vec::new();

    if let Some(path) = config_file {
        replacements = load_config_file(path)?;
        debug!(
            "Loaded {} replacement(s) from {}",
            replacements.len(),
            path.display()
        );
    }

    if let Some(replace) = replace.filter(|r| !r.is_empty()) {
        replacements = parse_replace_flag(replace)?;
        debug!("Using {} replacement(s) from --replace", replacements.len());
    }

    ReplacementSet::new(replacements).ok_or(Error::RequiredFlags {
        flags: vec!["config-file", "replace"],
    })
}
