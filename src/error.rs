use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures during a scan. Everything except [`ScanError::Pattern`] is scoped
/// to one root or one file and never aborts the rest of the scan.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid notice pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Cannot access root: {path}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl ScanError {
    /// The message followed by its immediate cause, for log lines.
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(cause) => format!("{self}: {cause}"),
            None => self.to_string(),
        }
    }
}
