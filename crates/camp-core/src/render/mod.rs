//! Prompt rendering.
//!
//! Turns a completed campaign plus its resolved ideas into the final output
//! text blocks, one per variation. Rendering is deterministic for a given
//! random seed; the random source is injected by the caller.

pub mod dialogue;
pub mod renderer;

pub use renderer::render;
