//! Guided campaign collection flow.
//!
//! A linear state machine walks the user through the campaign parameters,
//! one validated field per state, with two branch points (concept source,
//! video-only duration). The terminal step resolves ideas, plans segments,
//! renders the output and resets the session.

pub mod input;
pub mod machine;
pub mod state;

pub use input::{IdeaPick, LanguageChoice, UserInput, parse_concept_choice, parse_format_choice};
pub use machine::{CampaignFlow, Conversation, Reply};
pub use state::FlowState;
