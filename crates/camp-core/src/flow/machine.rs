//! The conversation state machine.

use super::input::{IdeaPick, LanguageChoice, UserInput, parse_concept_choice, parse_format_choice};
use super::state::FlowState;
use crate::error::{CampError, Result};
use crate::idea::{Idea, IdeaBank, IdeaQuery};
use crate::language::{Language, infer_native_language};
use crate::planner::{MAX_TOTAL_SECONDS, MIN_TOTAL_SECONDS};
use crate::render;
use crate::session::{ConceptMode, CreativeFormat, Session, SessionStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How many candidate ideas the random-concept menu presents.
pub const IDEA_MENU_COUNT: usize = 4;
/// Bounds on the requested number of output variations.
pub const MIN_VARIATIONS: usize = 1;
pub const MAX_VARIATIONS: usize = 4;

/// One user's conversation: current state plus the accumulating session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub state: FlowState,
    pub session: Session,
}

/// The engine's answer to one inbound action: ordered outbound messages
/// and the state the conversation is now in. The transport delivers the
/// messages in order, chunking oversized ones at its own size limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub messages: Vec<String>,
    pub state: FlowState,
}

impl Reply {
    fn new(messages: Vec<String>, state: FlowState) -> Self {
        Self { messages, state }
    }

    fn single(message: impl Into<String>, state: FlowState) -> Self {
        Self::new(vec![message.into()], state)
    }
}

/// Drives the ordered collection of session fields and, on the terminal
/// step, resolves ideas, renders the output and resets the session.
///
/// Each session key gets its own [`Conversation`] behind a per-key mutex,
/// so concurrent deliveries for one key serialize while distinct keys
/// proceed independently.
pub struct CampaignFlow {
    sessions: SessionStore<Conversation>,
    idea_bank: IdeaBank,
    seed: Option<u64>,
}

impl CampaignFlow {
    pub fn new(idea_bank: IdeaBank) -> Self {
        Self {
            sessions: SessionStore::new(),
            idea_bank,
            seed: None,
        }
    }

    /// Fixes the random seed so menu sampling and rendering are
    /// reproducible. Without a seed every generation draws fresh entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Routes one inbound action to the handler for the key's current state.
    ///
    /// # Errors
    ///
    /// Only internal contract violations surface as `Err`; every user
    /// mistake is answered with a re-prompt inside an `Ok` reply.
    pub async fn handle(&self, session_key: &str, input: UserInput) -> Result<Reply> {
        let entry = self.sessions.entry(session_key).await;
        let mut convo = entry.lock().await;

        match input {
            UserInput::Start => {
                convo.session.clear();
                convo.state = FlowState::CollectBrand;
                Ok(Reply::single(
                    format!("Let's create a new campaign creative.\n\n{}", prompt_brand()),
                    convo.state,
                ))
            }
            UserInput::Cancel => {
                convo.session.clear();
                convo.state = FlowState::CollectBrand;
                Ok(Reply::single(
                    "Cancelled. All campaign details were discarded. Send /start to begin again.",
                    convo.state,
                ))
            }
            UserInput::Text(text) => self.handle_text(&mut convo, &text).await,
        }
    }

    /// Returns a snapshot of the conversation for a key.
    pub async fn peek(&self, session_key: &str) -> Conversation {
        let entry = self.sessions.entry(session_key).await;
        let convo = entry.lock().await;
        convo.clone()
    }

    async fn handle_text(&self, convo: &mut Conversation, text: &str) -> Result<Reply> {
        let trimmed = text.trim();

        match convo.state {
            FlowState::CollectBrand => Ok(collect_brand(convo, trimmed)),
            FlowState::CollectMarket => Ok(collect_market(convo, trimmed)),
            FlowState::CollectFormat => Ok(collect_format(convo, trimmed)),
            FlowState::CollectStyle => Ok(collect_style(convo, trimmed)),
            FlowState::CollectGoalOrActor => Ok(collect_goal_or_actor(convo, trimmed)),
            FlowState::CollectConceptMode => self.collect_concept_mode(convo, trimmed).await,
            FlowState::CollectCustomConcept => Ok(collect_custom_concept(convo, trimmed)),
            FlowState::CollectRandomIdeaPick => Ok(collect_idea_pick(convo, trimmed)),
            FlowState::CollectDuration => Ok(collect_duration(convo, trimmed)),
            FlowState::CollectLanguage => Ok(collect_language(convo, trimmed)),
            FlowState::CollectVariationCount => self.collect_variation_count(convo, trimmed).await,
        }
    }

    /// Concept mode branch point. The random branch resolves the candidate
    /// menu immediately, which is where external delegation (and its
    /// fallback) happens.
    async fn collect_concept_mode(&self, convo: &mut Conversation, text: &str) -> Result<Reply> {
        match parse_concept_choice(text) {
            Some(ConceptMode::Custom) => {
                convo.session.concept_mode = Some(ConceptMode::Custom);
                convo.state = FlowState::CollectCustomConcept;
                Ok(Reply::single(prompt_custom_concept(), convo.state))
            }
            Some(ConceptMode::Random) => {
                convo.session.concept_mode = Some(ConceptMode::Random);

                // The flow collects the format well before this step, so a
                // missing value is a state-ordering bug, not user error.
                let Some(format) = convo.session.format else {
                    return Err(CampError::internal(
                        "format missing at the concept-mode step",
                    ));
                };

                let market = convo.session.market.clone().unwrap_or_default();
                let style = convo.session.style.clone().unwrap_or_default();
                let language =
                    infer_native_language(&market).unwrap_or_else(Language::default_english);

                let query = IdeaQuery {
                    format,
                    market: &market,
                    style: &style,
                    language: &language,
                    count: IDEA_MENU_COUNT,
                    mode: ConceptMode::Random,
                    custom_text: None,
                };
                let mut rng = self.make_rng();
                let menu = self.idea_bank.get_ideas(&query, &mut rng).await;

                let prompt = prompt_idea_menu(&menu);
                convo.session.idea_menu = menu;
                convo.state = FlowState::CollectRandomIdeaPick;
                Ok(Reply::single(prompt, convo.state))
            }
            None => Ok(Reply::single(
                format!("Please answer random or custom.\n\n{}", prompt_concept_mode()),
                convo.state,
            )),
        }
    }

    /// Terminal step: validate the count, then generate and reset.
    async fn collect_variation_count(&self, convo: &mut Conversation, text: &str) -> Result<Reply> {
        let Ok(count) = text.parse::<usize>() else {
            return Ok(Reply::single(
                format!("Please send a whole number.\n\n{}", prompt_variations()),
                convo.state,
            ));
        };

        convo.session.variation_count = Some(count.clamp(MIN_VARIATIONS, MAX_VARIATIONS));
        self.generate(convo).await
    }

    async fn generate(&self, convo: &mut Conversation) -> Result<Reply> {
        let campaign = convo.session.to_campaign().inspect_err(|err| {
            tracing::error!(error = %err, "state machine reached generation with missing fields");
        })?;

        // A picked or user-written concept drives every variation; with no
        // concept text, fresh random ideas are drawn now, one per variation.
        let mode = if convo.session.concept_text.is_some() {
            ConceptMode::Custom
        } else {
            ConceptMode::Random
        };
        let query = IdeaQuery {
            format: campaign.format,
            market: &campaign.market,
            style: &campaign.style,
            language: &campaign.language,
            count: campaign.variation_count,
            mode,
            custom_text: convo.session.concept_text.as_deref(),
        };

        let mut rng = self.make_rng();
        let ideas: Vec<Idea> = self.idea_bank.get_ideas(&query, &mut rng).await;
        convo.session.ideas = ideas.clone();

        let mut messages = render::render(&campaign, &ideas, &mut rng);
        if campaign.format == CreativeFormat::Video {
            messages.push(
                "Important: generate the reference still for each variation first, then upload it as the image input for that variation's video prompts."
                    .to_string(),
            );
        }
        messages.push(format!(
            "Done. Your {} creative variation(s) are ready. Send /start to begin a new one.",
            campaign.variation_count
        ));

        tracing::info!(
            format = %campaign.format,
            market = %campaign.market,
            variations = campaign.variation_count,
            "campaign generated"
        );

        convo.session.clear();
        convo.state = FlowState::CollectBrand;
        Ok(Reply::new(messages, convo.state))
    }
}

fn collect_brand(convo: &mut Conversation, text: &str) -> Reply {
    if text.is_empty() {
        return Reply::single(
            format!("The brand name cannot be empty.\n\n{}", prompt_brand()),
            convo.state,
        );
    }
    convo.session.brand = Some(text.to_string());
    convo.state = FlowState::CollectMarket;
    Reply::single(prompt_market(), convo.state)
}

fn collect_market(convo: &mut Conversation, text: &str) -> Reply {
    if text.is_empty() {
        return Reply::single(
            format!("The market cannot be empty.\n\n{}", prompt_market()),
            convo.state,
        );
    }
    convo.session.market = Some(text.to_string());
    convo.state = FlowState::CollectFormat;
    Reply::single(prompt_format(), convo.state)
}

fn collect_format(convo: &mut Conversation, text: &str) -> Reply {
    match parse_format_choice(text) {
        Some(format) => {
            convo.session.format = Some(format);
            convo.state = FlowState::CollectStyle;
            Reply::single(prompt_style(), convo.state)
        }
        None => Reply::single(
            format!("Please answer video or image.\n\n{}", prompt_format()),
            convo.state,
        ),
    }
}

fn collect_style(convo: &mut Conversation, text: &str) -> Reply {
    if text.is_empty() {
        return Reply::single(
            format!("The style cannot be empty.\n\n{}", prompt_style()),
            convo.state,
        );
    }
    convo.session.style = Some(text.to_string());
    convo.state = FlowState::CollectGoalOrActor;
    Reply::single(prompt_goal_or_actor(), convo.state)
}

/// One free-text message covers both optional refinements: the goal comes
/// first, an actor description may follow after a newline or semicolon.
fn collect_goal_or_actor(convo: &mut Conversation, text: &str) -> Reply {
    if text.is_empty() {
        return Reply::single(
            format!("Please send at least the goal.\n\n{}", prompt_goal_or_actor()),
            convo.state,
        );
    }

    let separator = if text.contains('\n') { '\n' } else { ';' };
    let mut parts = text.splitn(2, separator);
    let goal = parts.next().unwrap_or_default().trim();
    let actor = parts.next().map(str::trim).filter(|a| !a.is_empty());

    convo.session.goal = Some(goal.to_string());
    convo.session.actor_description = actor.map(str::to_string);
    convo.state = FlowState::CollectConceptMode;
    Reply::single(prompt_concept_mode(), convo.state)
}

fn collect_custom_concept(convo: &mut Conversation, text: &str) -> Reply {
    if text.is_empty() {
        return Reply::single(
            format!("The concept cannot be empty.\n\n{}", prompt_custom_concept()),
            convo.state,
        );
    }
    convo.session.concept_text = Some(text.to_string());
    advance_past_concept(convo)
}

fn collect_idea_pick(convo: &mut Conversation, text: &str) -> Reply {
    match IdeaPick::parse(text, convo.session.idea_menu.len()) {
        Some(IdeaPick::Menu(n)) => {
            convo.session.concept_text = Some(convo.session.idea_menu[n - 1].description.clone());
            advance_past_concept(convo)
        }
        Some(IdeaPick::Surprise) => {
            convo.session.concept_text = None;
            advance_past_concept(convo)
        }
        None => Reply::single(
            format!(
                "Please pick a number between 1 and {}, or 0 to let me choose at generation time.\n\n{}",
                convo.session.idea_menu.len(),
                prompt_idea_menu(&convo.session.idea_menu)
            ),
            convo.state,
        ),
    }
}

/// After the concept branch the paths merge again; image campaigns skip
/// the duration step.
fn advance_past_concept(convo: &mut Conversation) -> Reply {
    if convo.session.format == Some(CreativeFormat::Video) {
        convo.state = FlowState::CollectDuration;
        Reply::single(prompt_duration(), convo.state)
    } else {
        convo.state = FlowState::CollectLanguage;
        Reply::single(
            prompt_language(convo.session.market.as_deref().unwrap_or_default()),
            convo.state,
        )
    }
}

/// Durations are stored already clamped to the supported range, so every
/// downstream consumer sees the same canonical value.
fn collect_duration(convo: &mut Conversation, text: &str) -> Reply {
    match text.parse::<u32>() {
        Ok(seconds) if seconds > 0 => {
            let clamped = seconds.clamp(MIN_TOTAL_SECONDS, MAX_TOTAL_SECONDS);
            convo.session.total_duration_seconds = Some(clamped);
            convo.state = FlowState::CollectLanguage;

            let prompt = prompt_language(convo.session.market.as_deref().unwrap_or_default());
            if clamped == seconds {
                Reply::single(prompt, convo.state)
            } else {
                Reply::single(
                    format!(
                        "Adjusted the length to {clamped} seconds (supported range is {MIN_TOTAL_SECONDS} to {MAX_TOTAL_SECONDS}).\n\n{prompt}"
                    ),
                    convo.state,
                )
            }
        }
        _ => Reply::single(
            format!(
                "Please send a positive number of seconds, e.g. 16.\n\n{}",
                prompt_duration()
            ),
            convo.state,
        ),
    }
}

fn collect_language(convo: &mut Conversation, text: &str) -> Reply {
    let market = convo.session.market.as_deref().unwrap_or_default();
    match LanguageChoice::parse(text) {
        Some(LanguageChoice::Native) => {
            convo.session.language =
                Some(infer_native_language(market).unwrap_or_else(Language::default_english));
        }
        Some(LanguageChoice::English) => {
            convo.session.language = Some(Language::default_english());
        }
        None => {
            return Reply::single(
                format!(
                    "Please answer native or english.\n\n{}",
                    prompt_language(market)
                ),
                convo.state,
            );
        }
    }

    convo.state = FlowState::CollectVariationCount;
    Reply::single(prompt_variations(), convo.state)
}

fn prompt_brand() -> String {
    "What is the brand name? (e.g., PAS, Betsson, AdmiralBet)".to_string()
}

fn prompt_market() -> String {
    "Which country or market is this for? (e.g., South Africa, Malawi, Argentina)".to_string()
}

fn prompt_format() -> String {
    "What type of creative do you want?\n- video (segmented video prompts)\n- image (a still composition brief)"
        .to_string()
}

fn prompt_style() -> String {
    "Describe the creative style (UGC selfie, UGC filmed by a friend, motion graphic, clean banner, or your own words)."
        .to_string()
}

fn prompt_goal_or_actor() -> String {
    "What is the campaign goal? (Install, Reg, FTD, Brand awareness)\nOptionally add the actor description after a semicolon, e.g.\nInstall; young South African male, early 20s, funny and energetic"
        .to_string()
}

fn prompt_concept_mode() -> String {
    "Should I suggest random concepts, or do you want to describe the idea yourself? Answer random or custom."
        .to_string()
}

fn prompt_custom_concept() -> String {
    "Send a short description of the core idea for the creative.".to_string()
}

fn prompt_idea_menu(menu: &[Idea]) -> String {
    let mut lines = vec!["Here are some fresh concepts:".to_string(), String::new()];
    for (i, idea) in menu.iter().enumerate() {
        lines.push(format!("{}. {}: {}", i + 1, idea.title, idea.description));
    }
    lines.push(String::new());
    lines.push(format!(
        "Reply with a number (1-{}) to build on that idea, or 0 to let me pick fresh ones per variation.",
        menu.len()
    ));
    lines.join("\n")
}

fn prompt_duration() -> String {
    "What is the total video length in seconds? (e.g., 8, 16, 24, 32)".to_string()
}

fn prompt_language(market: &str) -> String {
    let native = infer_native_language(market).unwrap_or_else(Language::default_english);
    format!(
        "The script and text will be in:\n- the native language of {market} ({label})\n- or English?\nAnswer native or english.",
        label = native.label
    )
}

fn prompt_variations() -> String {
    format!("How many variations do you want? ({MIN_VARIATIONS} to {MAX_VARIATIONS})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow() -> CampaignFlow {
        CampaignFlow::new(IdeaBank::new(None)).with_seed(42)
    }

    async fn say(flow: &CampaignFlow, key: &str, text: &str) -> Reply {
        flow.handle(key, UserInput::parse(text)).await.unwrap()
    }

    /// Drives a conversation up to (and including) the style step.
    async fn advance_to_goal(flow: &CampaignFlow, key: &str) {
        say(flow, key, "/start").await;
        say(flow, key, "Acme").await;
        say(flow, key, "Argentina").await;
        say(flow, key, "video").await;
        say(flow, key, "UGC selfie").await;
    }

    #[tokio::test]
    async fn test_happy_path_states_in_order() {
        let flow = flow();
        let key = "chat-1";

        assert_eq!(say(&flow, key, "/start").await.state, FlowState::CollectBrand);
        assert_eq!(say(&flow, key, "Acme").await.state, FlowState::CollectMarket);
        assert_eq!(say(&flow, key, "Argentina").await.state, FlowState::CollectFormat);
        assert_eq!(say(&flow, key, "video").await.state, FlowState::CollectStyle);
        assert_eq!(say(&flow, key, "UGC selfie").await.state, FlowState::CollectGoalOrActor);
        assert_eq!(say(&flow, key, "Install").await.state, FlowState::CollectConceptMode);
        assert_eq!(say(&flow, key, "custom").await.state, FlowState::CollectCustomConcept);
        assert_eq!(say(&flow, key, "halftime check").await.state, FlowState::CollectDuration);
        assert_eq!(say(&flow, key, "16").await.state, FlowState::CollectLanguage);
        assert_eq!(say(&flow, key, "native").await.state, FlowState::CollectVariationCount);

        let reply = say(&flow, key, "2").await;
        assert_eq!(reply.state, FlowState::CollectBrand);
        assert!(reply.messages.len() >= 2);
    }

    #[tokio::test]
    async fn test_image_flow_skips_duration() {
        let flow = flow();
        let key = "chat-img";
        say(&flow, key, "/start").await;
        say(&flow, key, "Acme").await;
        say(&flow, key, "Peru").await;
        say(&flow, key, "image").await;
        say(&flow, key, "clean banner").await;
        say(&flow, key, "Reg").await;
        say(&flow, key, "custom").await;

        let reply = say(&flow, key, "big promo numbers").await;
        assert_eq!(reply.state, FlowState::CollectLanguage);
    }

    #[tokio::test]
    async fn test_invalid_input_reprompts_without_mutation() {
        let flow = flow();
        let key = "chat-2";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;

        let before = flow.peek(key).await;
        let reply = say(&flow, key, "definitely not a mode").await;
        let after = flow.peek(key).await;

        assert_eq!(reply.state, FlowState::CollectConceptMode);
        assert_eq!(before, after, "invalid input must not touch the session");

        // Malformed numbers behave the same way later in the flow
        say(&flow, key, "custom").await;
        say(&flow, key, "an idea").await;
        let before = flow.peek(key).await;
        say(&flow, key, "sixteen").await;
        let after = flow.peek(key).await;
        assert_eq!(before, after);
        assert_eq!(after.state, FlowState::CollectDuration);
    }

    #[tokio::test]
    async fn test_reprompt_is_idempotent() {
        let flow = flow();
        let key = "chat-3";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;

        let first = say(&flow, key, "???").await;
        let second = say(&flow, key, "???").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cancel_clears_session_mid_flow() {
        let flow = flow();
        let key = "chat-4";
        advance_to_goal(&flow, key).await;

        let reply = say(&flow, key, "/cancel").await;
        assert_eq!(reply.state, FlowState::CollectBrand);

        let convo = flow.peek(key).await;
        assert!(convo.session.is_empty());
        assert_eq!(convo.session.brand, None);
        assert_eq!(convo.session.market, None);
    }

    #[tokio::test]
    async fn test_start_mid_flow_behaves_as_cancel_then_restart() {
        let flow = flow();
        let key = "chat-5";
        advance_to_goal(&flow, key).await;

        let reply = say(&flow, key, "/start").await;
        assert_eq!(reply.state, FlowState::CollectBrand);
        assert!(flow.peek(key).await.session.is_empty());

        // The next text is treated as a brand, not a style
        say(&flow, key, "NewBrand").await;
        assert_eq!(
            flow.peek(key).await.session.brand,
            Some("NewBrand".to_string())
        );
    }

    #[tokio::test]
    async fn test_sessions_do_not_leak_across_keys() {
        let flow = flow();
        say(&flow, "user-a", "/start").await;
        say(&flow, "user-a", "BrandA").await;
        say(&flow, "user-b", "/start").await;

        assert_eq!(flow.peek("user-b").await.session.brand, None);
        assert_eq!(
            flow.peek("user-a").await.session.brand,
            Some("BrandA".to_string())
        );
    }

    #[tokio::test]
    async fn test_random_mode_presents_menu_and_accepts_pick() {
        let flow = flow();
        let key = "chat-6";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;

        let reply = say(&flow, key, "random").await;
        assert_eq!(reply.state, FlowState::CollectRandomIdeaPick);
        assert!(reply.messages[0].contains("1."));
        assert_eq!(flow.peek(key).await.session.idea_menu.len(), IDEA_MENU_COUNT);

        let reply = say(&flow, key, "2").await;
        assert_eq!(reply.state, FlowState::CollectDuration);
        assert!(flow.peek(key).await.session.concept_text.is_some());
    }

    #[tokio::test]
    async fn test_end_to_end_video_generation() {
        // brand=Acme, market=Argentina, format=video, duration=16,
        // variations=2, random concepts with surprise pick.
        let flow = flow();
        let key = "chat-7";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;
        say(&flow, key, "random").await;
        say(&flow, key, "0").await;
        say(&flow, key, "16").await;
        say(&flow, key, "native").await;

        let reply = say(&flow, key, "2").await;

        let blocks: Vec<&String> = reply
            .messages
            .iter()
            .filter(|m| m.contains("VIDEO PROMPT - VARIATION"))
            .collect();
        assert_eq!(blocks.len(), 2);

        for block in &blocks {
            assert!(block.contains("SEGMENT 1 of 2: seconds 1 to 8"));
            assert!(block.contains("SEGMENT 2 of 2: seconds 9 to 16"));
            // Argentina infers Spanish for the dialogue examples
            assert!(block.contains("in Spanish"));
            let frame = block.split("REFERENCE FRAME").nth(1).unwrap();
            assert!(frame.contains("the screen is never visible to the camera"));
        }

        // Distinct pool ideas per variation in surprise mode
        assert_ne!(blocks[0], blocks[1]);

        // Session fully reset afterwards
        let convo = flow.peek(key).await;
        assert!(convo.session.is_empty());
        assert_eq!(convo.state, FlowState::CollectBrand);
    }

    #[tokio::test]
    async fn test_out_of_range_duration_is_clamped_before_rendering() {
        let flow = flow();
        let key = "chat-9";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;
        say(&flow, key, "custom").await;
        say(&flow, key, "an idea").await;

        let reply = say(&flow, key, "100").await;
        assert!(reply.messages[0].contains("Adjusted the length to 32 seconds"));
        assert_eq!(
            flow.peek(key).await.session.total_duration_seconds,
            Some(MAX_TOTAL_SECONDS)
        );

        say(&flow, key, "english").await;
        let reply = say(&flow, key, "1").await;
        let block = &reply.messages[0];

        // The stated total and the segment plan must agree
        assert!(block.contains("Total length: 32 seconds"));
        assert!(block.contains("SEGMENT 4 of 4: seconds 25 to 32"));
        assert!(!block.contains("100 seconds"));
    }

    #[tokio::test]
    async fn test_missing_format_at_concept_mode_is_a_contract_violation() {
        let flow = flow();
        let key = "chat-10";
        {
            let entry = flow.sessions.entry(key).await;
            let mut convo = entry.lock().await;
            convo.state = FlowState::CollectConceptMode;
            convo.session.market = Some("Argentina".to_string());
            convo.session.style = Some("UGC selfie".to_string());
        }

        let err = flow.handle(key, UserInput::parse("random")).await.unwrap_err();
        assert!(err.is_internal());
    }

    #[tokio::test]
    async fn test_variation_count_is_clamped() {
        let flow = flow();
        let key = "chat-8";
        advance_to_goal(&flow, key).await;
        say(&flow, key, "Install").await;
        say(&flow, key, "custom").await;
        say(&flow, key, "an idea").await;
        say(&flow, key, "8").await;
        say(&flow, key, "english").await;

        let reply = say(&flow, key, "99").await;
        let blocks = reply
            .messages
            .iter()
            .filter(|m| m.contains("VIDEO PROMPT - VARIATION"))
            .count();
        assert_eq!(blocks, MAX_VARIATIONS);
    }
}
