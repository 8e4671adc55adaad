use std::io;
use std::path::PathBuf;

use thiserror::Error;
use vocab_parser::ModelError;

/// Conditions that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("input directory not found: {0}")]
    InputDirMissing(PathBuf),

    #[error("failed to list input directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .txt files found in {0}")]
    NoInputFiles(PathBuf),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A report file that could not be written. Logged, never fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write workbook {path}: {source}")]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
