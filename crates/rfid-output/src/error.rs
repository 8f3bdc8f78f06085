//! Error types for output generation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    // === Serialization ===
    #[error("failed to serialize {target}")]
    Csv {
        target: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to finish {target}")]
    Buffer {
        target: String,
        #[source]
        source: std::io::Error,
    },

    // === Filesystem ===
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove stale report {path}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
