//! Common error types.

use thiserror::Error;

/// Main error type for the tab menu crates.
#[derive(Error, Debug)]
pub enum TabError {
    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type TabResult<T> = Result<T, TabError>;

impl TabError {
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}
