//! CAMP core: campaign parameter collection and prompt generation.
//!
//! The crate is organized leaf-first:
//! - [`language`]: market to language inference
//! - [`planner`]: duration to segment planning
//! - [`idea`]: idea bank, external source trait, fallback pool
//! - [`session`]: the per-user parameter record and keyed store
//! - [`flow`]: the conversation state machine
//! - [`render`]: the prompt rendering pipeline

pub mod config;
pub mod error;
pub mod flow;
pub mod idea;
pub mod language;
pub mod planner;
pub mod render;
pub mod session;

// Re-export common error type
pub use error::CampError;
