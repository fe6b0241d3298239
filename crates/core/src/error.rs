use std::io;

/// Errors that can occur during project-model resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for dotty-ide-core operations
pub type Result<T> = std::result::Result<T, Error>;
