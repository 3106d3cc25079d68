use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagParseError {
    #[error("Tag parse error: {0}")]
    Generic(String),
    #[error(transparent)]
    Expected(#[from] TagParseExpectedError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors caused by user input (usually the configuration file) rather than by a bug.
#[derive(Error, Debug)]
pub enum TagParseExpectedError {
    #[error("{0}")]
    Generic(String),
    #[error("Configuration file not found ({path})")]
    ConfigNotFound { path: PathBuf },
    #[error("Failed to decode configuration file ({path}): {message}")]
    ConfigDecode { path: PathBuf, message: String },
    #[error("Invalid value for {key} in configuration file ({path}): {message}")]
    InvalidConfigValue { key: String, path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, TagParseError>;
