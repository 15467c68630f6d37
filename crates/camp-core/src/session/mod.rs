//! Per-user campaign session state.
//!
//! A [`Session`] is the mutable parameter record accumulated across dialogue
//! turns. It is owned exclusively by one conversation, mutated only by the
//! flow handlers, read (never mutated) by the renderer, and cleared on
//! completion, cancellation, or re-entry.

pub mod model;
pub mod store;

pub use model::{Campaign, ConceptMode, CreativeFormat, Session};
pub use store::SessionStore;
