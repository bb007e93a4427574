//! The text shown to the user

use std::env;
use std::path::Path;

use crate::PresenterError;

/// Heading placed above the directory path
pub const WORKING_DIRECTORY_HEADING: &str = "Working directory:";

/// A dialog title and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    title: String,
    text: String,
}

impl Message {
    pub fn new<T: Into<String>, B: Into<String>>(title: T, text: B) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// Message naming the given directory
    pub fn working_directory<T: Into<String>>(title: T, cwd: &Path) -> Self {
        // Real newline; each dialog strategy encodes it for its own syntax
        Self::new(
            title,
            format!("{}\n{}", WORKING_DIRECTORY_HEADING, cwd.display()),
        )
    }

    /// Message naming the process's current working directory
    pub fn for_current_dir<T: Into<String>>(title: T) -> Result<Self, PresenterError> {
        let cwd = env::current_dir().map_err(|source| PresenterError::WorkingDirectory { source })?;
        Ok(Self::working_directory(title, &cwd))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
