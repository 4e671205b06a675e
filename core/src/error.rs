use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the graph, the path engine, and word ingestion.
///
/// Every condition here is local and recoverable; the caller decides
/// whether to abort.
#[derive(Debug, Error)]
pub enum LadderError {
    #[error("vertex '{0}' is not in the graph")]
    InvalidVertex(String),

    #[error("vertex '{0}' is already in the graph")]
    DuplicateVertex(String),

    #[error("'{0}' cannot be connected to itself")]
    SelfReference(String),

    #[error("no path from '{from}' to '{to}'")]
    Unreachable { from: String, to: String },

    #[error("shortest paths not computed; call precompute() after the last graph change")]
    NotPrecomputed,

    #[error("vertex labels must be non-empty")]
    EmptyLabel,

    #[error("cannot precompute paths over an empty vocabulary")]
    EmptyVocabulary,

    #[error("graph uses {used_mb}MB, exceeds max_memory_mb={max_mb}MB")]
    MemoryLimit { used_mb: usize, max_mb: usize },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, LadderError>;

// Readers without a backing file still get a path for the message.
impl From<std::io::Error> for LadderError {
    fn from(source: std::io::Error) -> Self {
        LadderError::Io {
            source,
            path: PathBuf::from("<reader>"),
        }
    }
}
