//! Types for loaded prompts: [`Prompt`] (one line) and [`Prompts`] (non-empty list).

use std::fmt;

use super::DataError;

/// Marks a comment line in a prompts file.
pub const COMMENT_PREFIX: char = '#';

/// A single prompt: one line of a prompts file with its line ending removed.
///
/// Inner and surrounding spaces are kept, since space is a vocabulary character.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prompt(String);

impl Prompt {
    /// Parses one line. Returns `None` for blank lines and `#` comments.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.trim_start().starts_with(COMMENT_PREFIX) {
            return None;
        }
        Some(Prompt(line.to_string()))
    }

    /// Returns the inner string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Loaded prompts: a non-empty list of [`Prompt`]s in file order.
#[derive(Clone, Debug)]
pub struct Prompts(Vec<Prompt>);

impl Prompts {
    /// Builds [`Prompts`] from a non-empty list.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when `items` is empty.
    pub fn new(items: Vec<Prompt>) -> Result<Self, DataError> {
        if items.is_empty() {
            return Err(DataError::EmptyFile);
        }
        Ok(Prompts(items))
    }

    /// Parses file content, skipping blank and comment lines.
    ///
    /// # Errors
    ///
    /// - [`DataError::EmptyFile`] when no line holds a prompt.
    pub fn parse(content: &str) -> Result<Self, DataError> {
        Self::new(content.lines().filter_map(Prompt::from_line).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no prompts (should not happen for a valid [`Prompts`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Prompt] {
        &self.0
    }

    /// Returns the prompts as string slices.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.0.iter().map(Prompt::as_str).collect()
    }
}
