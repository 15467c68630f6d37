//! Flow states.

use serde::{Deserialize, Serialize};

/// The collection step a conversation is currently in.
///
/// States form a linear order with two branch points: the concept source
/// (custom text vs. random idea pick) and the video-only duration step.
/// Generation is not a state of its own; it runs inside the terminal
/// handler and drops the conversation back to [`FlowState::CollectBrand`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    CollectBrand,
    CollectMarket,
    CollectFormat,
    CollectStyle,
    CollectGoalOrActor,
    CollectConceptMode,
    CollectCustomConcept,
    CollectRandomIdeaPick,
    CollectDuration,
    CollectLanguage,
    CollectVariationCount,
}
