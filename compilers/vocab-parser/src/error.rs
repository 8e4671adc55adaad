use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the tagger model or the lexicon. All of them are
/// fatal for a run.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("annotation model not found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read annotation model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load tagger model {path}: {source}")]
    Tagger {
        path: PathBuf,
        #[source]
        source: nlprule::Error,
    },

    #[error("invalid JSON lexicon {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt lexicon archive: {0}")]
    Archive(String),

    #[error("lexicon {0} has no stopwords, entities or marker words")]
    Empty(PathBuf),
}
