use std::io;

use thiserror::Error;

/// Error type for structural conversion failures.
///
/// Field-level malformed data never reaches this type; the normalizer
/// degrades such values to sentinel codes instead. Only an unreadable
/// file or a malformed top-level container aborts a run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed parsing '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed encoding '{path}': {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },
}
