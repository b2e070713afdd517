use std::path::PathBuf;

use thiserror::Error;

/// Returned by [`crate::frontier::Frontier::remove`] when nothing is pending.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontierError {
    #[error("empty frontier")]
    Empty,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
}
