//! External idea-generation collaborator interface.

use crate::error::Result;
use crate::session::CreativeFormat;
use serde::{Deserialize, Serialize};

/// A creative concept: a short title plus a detailed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
}

impl Idea {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Structured request sent to an external idea generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub format: CreativeFormat,
    pub market: String,
    pub style: String,
    /// Human readable language label, e.g. "Spanish".
    pub language: String,
    pub count: usize,
}

/// An external creative-idea generator.
///
/// Implementations may fail in any way (network, timeout, malformed
/// response); callers are expected to mask failures with a local fallback.
#[async_trait::async_trait]
pub trait IdeaSource: Send + Sync {
    /// Generates up to `request.count` ideas for the given campaign.
    async fn generate(&self, request: &IdeaRequest) -> Result<Vec<Idea>>;
}
