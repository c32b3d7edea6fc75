//! Error types
//!
//! `ReadError` is per-file and recoverable: the batch prints a diagnostic and
//! moves on to the next file. `BatchError` aborts the whole run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read one discovered input file.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Error: File not found -> {name}")]
    NotFound { name: String },

    #[error("Error: Expected a file but got a directory -> {name}")]
    IsDirectory { name: String },

    #[error("Error: Could not read file -> {name} ({source})")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error raised while opening or reading `name`.
    pub fn from_io(name: impl Into<String>, source: std::io::Error) -> Self {
        let name = name.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ReadError::NotFound { name },
            std::io::ErrorKind::IsADirectory => ReadError::IsDirectory { name },
            _ => ReadError::Io { name, source },
        }
    }
}

/// Run-level failures. Any of these ends the batch.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Nothing to process. The results file is left untouched.
    #[error("No .txt files found in the current folder.")]
    NoInputFiles,

    #[error("Cannot list directory '{}': {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Cannot create results file '{}': {source}", path.display())]
    ResultsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a report line to the console or the results file failed
    #[error("Cannot write report: {0}")]
    Output(#[source] std::io::Error),
}

impl BatchError {
    pub fn results_file(path: &Path, source: std::io::Error) -> Self {
        BatchError::ResultsFile {
            path: path.to_path_buf(),
            source,
        }
    }
}
