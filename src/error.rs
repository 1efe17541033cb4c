//! Crate error type.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SupernetError>;

/// Errors produced while parsing, aggregating or rendering networks.
#[derive(thiserror::Error, Debug)]
pub enum SupernetError {
    /// Text that is not a valid CIDR block.
    #[error("{input:?} is not a valid network: {reason}")]
    InvalidNetworkFormat { input: String, reason: String },

    /// A supernet/subnet request that goes the wrong way for the network.
    #[error("Invalid prefix length /{requested} for a /{prefix_len} network")]
    InvalidPrefixLength { prefix_len: u8, requested: u8 },

    /// The input file could not be opened or read.
    #[error("Unable to read input {path:?}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error initializing log4rs: {0}")]
    Logging(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl SupernetError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        SupernetError::InvalidNetworkFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
