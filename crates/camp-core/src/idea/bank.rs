//! Idea bank: bounded idea supply with transparent fallback.

use super::pool::fallback_pool;
use super::source::{Idea, IdeaRequest, IdeaSource};
use crate::language::Language;
use crate::session::{ConceptMode, CreativeFormat};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Default ceiling on one delegation round-trip.
pub const DELEGATION_TIMEOUT: Duration = Duration::from_secs(20);

/// One idea lookup: the campaign context plus how ideas are resolved.
#[derive(Debug, Clone)]
pub struct IdeaQuery<'a> {
    pub format: CreativeFormat,
    pub market: &'a str,
    pub style: &'a str,
    pub language: &'a Language,
    pub count: usize,
    pub mode: ConceptMode,
    /// Set when the user supplied or picked a concept.
    pub custom_text: Option<&'a str>,
}

/// Supplies a bounded number of distinct creative ideas.
///
/// Delegates to an external [`IdeaSource`] when one is configured; any
/// failure (timeout, transport error, malformed or short response) is
/// masked by sampling the local fallback pool. `get_ideas` never errors.
pub struct IdeaBank {
    source: Option<Arc<dyn IdeaSource>>,
    delegation_timeout: Duration,
}

impl IdeaBank {
    /// Builds a bank that may delegate to `source`. Passing `None` forces
    /// fallback-only mode: delegation is never attempted.
    pub fn new(source: Option<Arc<dyn IdeaSource>>) -> Self {
        Self {
            source,
            delegation_timeout: DELEGATION_TIMEOUT,
        }
    }

    /// Overrides the delegation timeout.
    pub fn with_timeout(mut self, delegation_timeout: Duration) -> Self {
        self.delegation_timeout = delegation_timeout;
        self
    }

    /// Returns exactly `query.count` ideas.
    ///
    /// Custom mode derives every entry from the supplied concept text,
    /// keeping the original content verbatim as its core. Random mode
    /// delegates when possible and falls back to the static pool otherwise.
    pub async fn get_ideas<R: Rng>(&self, query: &IdeaQuery<'_>, rng: &mut R) -> Vec<Idea> {
        if query.mode == ConceptMode::Custom {
            if let Some(text) = query.custom_text {
                return derive_from_custom(text, query.count);
            }
            // Custom mode without text is a wiring slip, not worth failing
            // a generation over; the pool still produces usable output.
            tracing::error!("custom concept mode without concept text, using pool");
        }

        match self.delegate(query).await {
            Some(ideas) => ideas,
            None => sample_pool(query.format, query.market, query.count, rng),
        }
    }

    async fn delegate(&self, query: &IdeaQuery<'_>) -> Option<Vec<Idea>> {
        let source = self.source.as_ref()?;
        let request = IdeaRequest {
            format: query.format,
            market: query.market.to_string(),
            style: query.style.to_string(),
            language: query.language.label.clone(),
            count: query.count,
        };

        let outcome = timeout(self.delegation_timeout, source.generate(&request)).await;
        match outcome {
            Ok(Ok(mut ideas)) if ideas.len() >= query.count => {
                ideas.truncate(query.count);
                Some(ideas)
            }
            Ok(Ok(ideas)) => {
                tracing::warn!(
                    returned = ideas.len(),
                    requested = query.count,
                    "idea source returned too few ideas, using fallback pool"
                );
                None
            }
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "idea source failed, using fallback pool");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.delegation_timeout.as_secs(),
                    "idea source timed out, using fallback pool"
                );
                None
            }
        }
    }
}

/// Derives `count` entries that all carry the custom text verbatim,
/// distinguished by a variation marker in the title.
fn derive_from_custom(text: &str, count: usize) -> Vec<Idea> {
    (1..=count)
        .map(|i| Idea::new(format!("Custom concept (variation {i})"), text))
        .collect()
}

/// Samples `count` ideas from the static pool, without replacement while
/// the pool lasts, then cyclically with a sequence tag.
fn sample_pool<R: Rng>(
    format: CreativeFormat,
    market: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Idea> {
    let pool = fallback_pool(format, market);
    if pool.len() >= count {
        return pool.choose_multiple(rng, count).cloned().collect();
    }

    tracing::info!(
        pool = pool.len(),
        requested = count,
        "fallback pool smaller than request, repeating cyclically"
    );
    (0..count)
        .map(|i| {
            let base = &pool[i % pool.len()];
            Idea::new(format!("{} #{}", base.title, i + 1), base.description.clone())
        })
        .collect()
}
