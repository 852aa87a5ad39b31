use thiserror::Error;

/// Top-level error type for the inkbase plug runtime.
#[derive(Debug, Error)]
pub enum InkError {
    #[error("setting '{key}' must be a number")]
    ConfigType { key: String },

    #[error("document is too large, maximum is {max_mib}MiB")]
    DocumentTooLarge { max_mib: u64 },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
