//! Error types for loading and publishing process pattern documents

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or publishing documents.
///
/// Conversion itself never fails: unknown markup degrades to plain text and
/// absent elements render as empty fragments. Only the edges (XML parsing,
/// file I/O) produce errors.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The XML source is not well-formed
    #[error("XML parse error in '{}': {message}", path.display())]
    Xml { path: PathBuf, message: String },

    /// Reading a source or writing an output file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document root is outside the configured record namespace
    #[error("Root element is <{tag}>, expected an element in namespace '{namespace}'")]
    ForeignRoot { tag: String, namespace: String },

    /// The discovery pattern could not be built
    #[error("Invalid discovery pattern: {0}")]
    Pattern(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
