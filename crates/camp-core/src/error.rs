//! Error types for the CAMP engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the CAMP workspace.
///
/// User input validation failures are deliberately *not* represented here:
/// the conversation flow answers them with a re-prompt, never an `Err`.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CampError {
    /// Configuration error (missing or malformed environment values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Idea-generation collaborator failure (timeout, HTTP, bad shape).
    ///
    /// Always masked by the fallback pool inside `IdeaBank`; it only
    /// crosses a public boundary in `IdeaSource` implementations.
    #[error("Idea source error: {0}")]
    IdeaSource(String),

    /// Internal contract violation (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CampError {
    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IdeaSource error
    pub fn idea_source(message: impl Into<String>) -> Self {
        Self::IdeaSource(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an idea source error
    pub fn is_idea_source(&self) -> bool {
        matches!(self, Self::IdeaSource(_))
    }

    /// Check if this is an internal contract violation
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// A type alias for `Result<T, CampError>`.
pub type Result<T> = std::result::Result<T, CampError>;
