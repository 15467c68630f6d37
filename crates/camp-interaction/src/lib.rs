//! External idea-generation collaborators for CAMP.
//!
//! Currently a single implementation: a direct Gemini REST API client
//! that turns a structured [`camp_core::idea::IdeaRequest`] into creative
//! concepts. Failures never need special handling by callers; the core's
//! `IdeaBank` masks them with its local fallback pool.

pub mod gemini_api_agent;

pub use gemini_api_agent::GeminiApiAgent;
