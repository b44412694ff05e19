//! Text substitution for templatized files.

use crate::config::{Replacement, ReplacementSet};

/// Output of [`transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub bytes: Vec<u8>,
    /// `true` when the input was UTF-8 and the replacements ran over it,
    /// `false` when it was passed through as binary
    pub templated: bool,
}

/// Applies every replacement in order, each one to the result of the
/// previous. Matching is literal and case-sensitive and replaces all
/// non-overlapping occurrences.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .fold(text.to_string(), |text, replacement| {
            text.replace(&replacement.search, &replacement.replace)
        })
}

/// Templatizes `bytes` if they are valid UTF-8, otherwise hands them back
/// untouched.
pub fn transform(bytes: Vec<u8>, replacements: &ReplacementSet) -> Transformed {
    match String::from_utf8(bytes) {
        Ok(text) => Transformed {
            bytes: apply_replacements(&text, replacements.as_slice()).into_bytes(),
            templated: true,
        },
        Err(e) => Transformed {
            bytes: e.into_bytes(),
            templated: false,
        },
    }
}
