use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to read strategy directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("no strategy descriptions found in {path}")]
    NoStrategies { path: PathBuf },

    #[error("strategy '{name}' does not describe a recognizable width strategy")]
    UnknownStrategy { name: String },

    #[error("failed to write report {path}: {source}")]
    WriteReport { path: PathBuf, source: io::Error },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
