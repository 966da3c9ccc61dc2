//! [`PromptSource`](super::super::PromptSource) implementation that reads a UTF-8 file, one prompt per line.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::super::{DataError, PromptSource, Prompts};

/// Loads prompts from a file path (UTF-8, one prompt per line; blank and `#` lines skipped).
#[derive(Clone, Debug)]
pub struct PromptFile<P>(pub P);

impl<P> PromptFile<P>
where
    P: AsRef<Path>,
{
    /// Creates a loader for the given path.
    #[must_use]
    pub fn new(path: P) -> Self {
        PromptFile(path)
    }
}

impl<P> PromptSource for PromptFile<P>
where
    P: AsRef<Path>,
{
    fn load(&self) -> Result<Prompts, DataError> {
        let path = self.0.as_ref();
        let content = fs::read_to_string(path)?;
        let prompts = Prompts::parse(&content)?;
        debug!(path = %path.display(), count = prompts.len(), "loaded prompts");
        Ok(prompts)
    }
}

/// Convenience: load prompts from a path using [`PromptFile`].
///
/// # Errors
///
/// - [`DataError::Io`] when the path cannot be read or content is not valid UTF-8.
/// - [`DataError::EmptyFile`] when the file yields no prompts.
pub fn load_prompts(path: impl AsRef<Path>) -> Result<Prompts, DataError> {
    PromptFile::new(path).load()
}
