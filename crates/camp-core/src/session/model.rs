//! Session data model.

use crate::error::{CampError, Result};
use crate::idea::Idea;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Which downstream generator the campaign targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeFormat {
    /// Segmented video generation prompt.
    Video,
    /// Single composition brief for still-image generation.
    Image,
}

impl std::fmt::Display for CreativeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreativeFormat::Video => write!(f, "video"),
            CreativeFormat::Image => write!(f, "image"),
        }
    }
}

/// How the creative concept is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptMode {
    /// Draw ideas from the idea bank (external collaborator or local pool).
    Random,
    /// All variations derive from a user-supplied concept text.
    Custom,
}

/// The per-user campaign parameter record.
///
/// All fields start empty and are filled one by one as validated input
/// arrives. `idea_menu` is a transient candidate list shown during the
/// random-idea pick step; `ideas` is populated exactly once per generation
/// pass with exactly `variation_count` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub brand: Option<String>,
    pub market: Option<String>,
    pub format: Option<CreativeFormat>,
    pub style: Option<String>,
    pub goal: Option<String>,
    pub actor_description: Option<String>,
    pub language: Option<Language>,
    pub total_duration_seconds: Option<u32>,
    pub concept_mode: Option<ConceptMode>,
    pub concept_text: Option<String>,
    pub variation_count: Option<usize>,
    /// Candidate ideas presented during the random-idea pick step.
    pub idea_menu: Vec<Idea>,
    /// Ideas resolved for the current generation pass.
    pub ideas: Vec<Idea>,
}

impl Session {
    /// Clears every field, returning the session to its freshly-created state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no field has been collected yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Extracts the completed, validated parameter set for generation.
    ///
    /// Missing required fields at this point indicate a state-machine
    /// ordering bug, not bad user input, so they surface as
    /// [`CampError::Internal`].
    pub fn to_campaign(&self) -> Result<Campaign> {
        let brand = self.require_str(&self.brand, "brand")?;
        let market = self.require_str(&self.market, "market")?;
        let format = self
            .format
            .ok_or_else(|| CampError::internal("format missing at generation time"))?;
        let variation_count = self
            .variation_count
            .ok_or_else(|| CampError::internal("variation_count missing at generation time"))?;

        if format == CreativeFormat::Video && self.total_duration_seconds.is_none() {
            return Err(CampError::internal(
                "total_duration_seconds missing for video generation",
            ));
        }

        let actor = self
            .actor_description
            .clone()
            .unwrap_or_else(|| format!("a young football fan from {market}"));

        Ok(Campaign {
            brand,
            market,
            format,
            style: self.style.clone().unwrap_or_else(|| "UGC selfie".to_string()),
            goal: self.goal.clone().unwrap_or_else(|| "Install".to_string()),
            actor,
            language: self
                .language
                .clone()
                .unwrap_or_else(Language::default_english),
            total_duration_seconds: self.total_duration_seconds,
            variation_count,
        })
    }

    fn require_str(&self, field: &Option<String>, name: &'static str) -> Result<String> {
        field
            .clone()
            .ok_or_else(|| CampError::internal(format!("{name} missing at generation time")))
    }
}

/// The completed, read-only parameter set consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub brand: String,
    pub market: String,
    pub format: CreativeFormat,
    pub style: String,
    pub goal: String,
    pub actor: String,
    pub language: Language,
    /// Present only for video campaigns.
    pub total_duration_seconds: Option<u32>,
    pub variation_count: usize,
}
