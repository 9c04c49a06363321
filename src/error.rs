//! Error types for bijou

use thiserror::Error;

/// Main error type for bijou
#[derive(Error, Debug)]
pub enum BijouError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Frame input errors (recorded capture replay)
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Malformed frame packet: {0}")]
    Parse(String),
}

/// Result type alias for bijou operations
pub type Result<T> = std::result::Result<T, BijouError>;
