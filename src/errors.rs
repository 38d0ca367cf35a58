//! Error types shared by loaders, the similarity engine and the pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::document::DocId;

#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("malformed input in {path}:{line}: {reason}")]
    MalformedInput {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("cannot compute aggregates over empty {0}")]
    EmptyInput(&'static str),

    #[error("similarity undefined for document {id}: vector has zero norm")]
    UndefinedSimilarity { id: DocId },

    #[error("document {id} has no TF-IDF vector")]
    UnknownDocument { id: DocId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize recall report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CandidateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CandidateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CandidateResult<T> = Result<T, CandidateError>;
