//! Process configuration loaded from environment variables.
//!
//! Two values matter: the transport token (required by a real chat
//! transport, unused by the local CLI harness) and the optional idea
//! generation API key. When the key is absent the `IdeaBank` is built
//! without a delegation source and runs in fallback-only mode forever.

use crate::error::{CampError, Result};

/// Environment variable holding the chat transport token.
pub const TOKEN_ENV: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the optional Gemini API key.
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Runtime configuration for the CAMP host process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat transport authentication token.
    pub transport_token: String,
    /// Optional key enabling the idea-generation collaborator.
    pub gemini_api_key: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CampError::Config` if the transport token is missing or empty.
    pub fn from_env() -> Result<Self> {
        let transport_token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CampError::config(format!("{TOKEN_ENV} is not set")))?;

        let gemini_api_key = std::env::var(GEMINI_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());

        if gemini_api_key.is_none() {
            tracing::warn!("{GEMINI_KEY_ENV} not found, using fallback ideas only");
        }

        Ok(Self {
            transport_token,
            gemini_api_key,
        })
    }

    /// Builds a configuration for local runs that never touch a transport.
    pub fn local(gemini_api_key: Option<String>) -> Self {
        Self {
            transport_token: "local".to_string(),
            gemini_api_key,
        }
    }
}
