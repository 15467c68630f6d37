//! Creative idea supply.
//!
//! An [`Idea`] is a `{title, description}` concept consumed by the renderer.
//! The [`IdeaBank`] supplies a bounded number of distinct ideas per request,
//! either derived from a user-supplied concept, delegated to an external
//! [`IdeaSource`] collaborator, or sampled from the local fallback pool.

pub mod bank;
pub mod pool;
pub mod source;

pub use bank::{IdeaBank, IdeaQuery};
pub use source::{Idea, IdeaRequest, IdeaSource};
