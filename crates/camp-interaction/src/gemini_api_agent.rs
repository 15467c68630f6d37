//! GeminiApiAgent - Direct REST API implementation of [`IdeaSource`].
//!
//! Calls the Gemini REST API directly and asks for a strict JSON array of
//! `{title, concept}` objects. Anything other than that shape (including
//! transport failures and non-2xx statuses) surfaces as
//! `CampError::IdeaSource`, which the idea bank masks with its fallback.

use camp_core::error::{CampError, Result};
use camp_core::idea::{Idea, IdeaRequest, IdeaSource};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Idea source implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| CampError::idea_source(format!("Gemini API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| CampError::idea_source(format!("Failed to parse Gemini response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl IdeaSource for GeminiApiAgent {
    async fn generate(&self, request: &IdeaRequest) -> Result<Vec<Idea>> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: build_concept_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                temperature: 0.8,
            },
        };

        let text = self.send_request(&body).await?;
        let ideas = parse_concepts(&text)?;
        tracing::debug!(count = ideas.len(), model = %self.model, "gemini returned concepts");
        Ok(ideas)
    }
}

/// Builds the creative-strategist prompt for one structured request.
fn build_concept_prompt(request: &IdeaRequest) -> String {
    format!(
        "You are a top-tier creative strategist. Generate {count} unique and compelling creative concepts for an ad campaign, optimized for high user acquisition.\n\
         \n\
         The campaign parameters are:\n\
         - Target market: {market}\n\
         - Target language: {language}\n\
         - Creative type: {format}\n\
         - Creative style: {style}\n\
         - Constraint: concepts must NOT violate copyright (no real teams, no real player names).\n\
         \n\
         For each concept provide a unique 'title' and a detailed 'concept'.\n\
         Return a single JSON array of objects with exactly those two string fields, and nothing else.",
        count = request.count,
        market = request.market,
        language = request.language,
        format = request.format,
        style = request.style,
    )
}

/// Parses the model's JSON payload into ideas. Any shape other than an
/// array of `{title, concept}` objects is a failure.
fn parse_concepts(text: &str) -> Result<Vec<Idea>> {
    let raw: Vec<RawConcept> = serde_json::from_str(text.trim())
        .map_err(|err| CampError::idea_source(format!("Gemini returned malformed concepts: {err}")))?;

    if raw.is_empty() {
        return Err(CampError::idea_source("Gemini returned an empty concept list"));
    }

    Ok(raw
        .into_iter()
        .map(|c| Idea::new(c.title, c.concept))
        .collect())
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawConcept {
    title: String,
    concept: String,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            CampError::idea_source("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> CampError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    CampError::idea_source(format!("Gemini API error ({status}): {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camp_core::session::CreativeFormat;

    fn request() -> IdeaRequest {
        IdeaRequest {
            format: CreativeFormat::Video,
            market: "Argentina".to_string(),
            style: "UGC selfie".to_string(),
            language: "Spanish".to_string(),
            count: 4,
        }
    }

    #[test]
    fn test_concept_prompt_carries_all_parameters() {
        let prompt = build_concept_prompt(&request());
        assert!(prompt.contains("Generate 4 unique"));
        assert!(prompt.contains("Target market: Argentina"));
        assert!(prompt.contains("Target language: Spanish"));
        assert!(prompt.contains("Creative type: video"));
        assert!(prompt.contains("Creative style: UGC selfie"));
        assert!(prompt.contains("NOT violate copyright"));
    }

    #[test]
    fn test_parse_concepts_happy_path() {
        let text = r#"[
            {"title": "Halftime check", "concept": "A fan checks scores at halftime."},
            {"title": "Taxi update", "concept": "Catching results in a taxi."}
        ]"#;
        let ideas = parse_concepts(text).unwrap();
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].title, "Halftime check");
        assert_eq!(ideas[1].description, "Catching results in a taxi.");
    }

    #[test]
    fn test_parse_concepts_rejects_wrong_shapes() {
        assert!(parse_concepts("not json").unwrap_err().is_idea_source());
        assert!(parse_concepts("[]").unwrap_err().is_idea_source());
        assert!(
            parse_concepts(r#"{"title": "x", "concept": "y"}"#)
                .unwrap_err()
                .is_idea_source()
        );
        assert!(
            parse_concepts(r#"[{"title": "x"}]"#)
                .unwrap_err()
                .is_idea_source()
        );
    }

    #[test]
    fn test_http_error_uses_structured_body_when_present() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#.to_string(),
        );
        let text = err.to_string();
        assert!(text.contains("RESOURCE_EXHAUSTED"));
        assert!(text.contains("quota exceeded"));
    }
}
