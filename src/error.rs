use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type for the modnuke CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{}' does not exist or is not a directory", .0.display())]
    InvalidRoot(PathBuf),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Failed to launch editor: {0}")]
    Editor(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
