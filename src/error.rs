//! Error types for mdsite library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdsite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown or building pages.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An emphasis or code delimiter has no closing partner.
    #[error("Unbalanced delimiter `{delimiter}` in: {text}")]
    UnbalancedDelimiter {
        /// The delimiter that failed to pair up
        delimiter: String,
        /// The text being split
        text: String,
    },

    /// A leaf HTML node has no value.
    #[error("Leaf node is missing its value")]
    MissingLeafValue,

    /// A parent HTML node has no tag or no children.
    #[error("Parent node requires both a tag and children")]
    MissingParentContract,

    /// The first block of the document is not a level-1 heading.
    #[error("First block is not a level-1 heading")]
    MissingTitle,

    /// An ordered list label does not fit in an unsigned 64-bit integer.
    #[error("Invalid ordered list number: {0}")]
    InvalidListNumber(String),

    /// The page template could not be loaded.
    #[error("Template error: {0}")]
    Template(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error while generating a single page.
    #[error("Failed to generate {}: {source}", path.display())]
    Page {
        /// Source markdown file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the markdown source path to an error raised while generating a page.
    pub fn in_page(self, path: impl Into<PathBuf>) -> Self {
        Error::Page {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
