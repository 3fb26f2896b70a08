//! Error types for a merge run
//!
//! `MergeError` aborts the whole run. `WriteError` and `DeleteError` are local
//! to one file and only end up in the run report.

use std::path::PathBuf;
use thiserror::Error;

/// Stream-level failures that terminate the run
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed to open CSV file {path}")]
    OpenCsv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV file {path} at line {line}")]
    ReadCsv {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read template file {path}")]
    OpenTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to write one output file
#[derive(Debug, Error)]
#[error("Failed to write output file {path}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure to delete one file while clearing the output directory
#[derive(Debug, Error)]
#[error("Failed to delete {path}")]
pub struct DeleteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
