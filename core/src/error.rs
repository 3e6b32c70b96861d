//! Error types and utilities for the chat service

use thiserror::Error;

/// Chat service error types
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl ChatError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            ChatError::Io(_) => "CHAT001",
            ChatError::MalformedRequest(_) => "CHAT002",
            ChatError::Validation(_) => "CHAT003",
            ChatError::Configuration(_) => "CHAT004",
            ChatError::Template(_) => "CHAT005",
        }
    }
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, ChatError>;
