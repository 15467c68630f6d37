//! Renders a completed campaign into final prompt text blocks.

use super::dialogue::example_dialogue;
use crate::idea::Idea;
use crate::planner::plan_segments;
use crate::session::{Campaign, CreativeFormat};
use rand::Rng;
use rand::seq::SliceRandom;

const RULE: &str = "==================================================";

/// Per-segment focus descriptors for video prompts.
const VIDEO_FOCUS: &[&str] = &[
    "strong emotional reaction to a football moment",
    "clear call to action that invites the viewer to download or play",
    "natural fan behavior and small realistic details in the background",
];

/// Layout focus descriptors for image briefs.
const IMAGE_LAYOUT_FOCUS: &[&str] = &[
    "big central logo and CTA button",
    "strong promo numbers with a smaller logo",
    "phone held in a hand with clear brand elements around it",
    "clean background in brand colors with simple icons",
];

/// Renders one output block per idea.
///
/// Each block is produced independently from `(campaign, idea, index)` and
/// the injected random source, so a fixed seed yields identical output on
/// repeated calls.
pub fn render<R: Rng>(campaign: &Campaign, ideas: &[Idea], rng: &mut R) -> Vec<String> {
    ideas
        .iter()
        .enumerate()
        .map(|(i, idea)| match campaign.format {
            CreativeFormat::Video => render_video_variation(campaign, idea, i + 1, rng),
            CreativeFormat::Image => render_image_variation(campaign, idea, i + 1, rng),
        })
        .collect()
}

fn header(campaign: &Campaign) -> String {
    format!(
        "Brand: {} | Market: {} | Style: {} | Language: {}",
        campaign.brand, campaign.market, campaign.style, campaign.language.label
    )
}

fn render_video_variation<R: Rng>(
    campaign: &Campaign,
    idea: &Idea,
    variation: usize,
    rng: &mut R,
) -> String {
    // to_campaign guarantees the duration for video campaigns
    let segments = plan_segments(campaign.total_duration_seconds.unwrap_or(0));
    // The stated total must always equal what the segments cover
    let total: u32 = segments.iter().sum();
    let lang = &campaign.language.label;

    let mut lines: Vec<String> = Vec::new();
    lines.push(RULE.to_string());
    lines.push(format!(
        "VIDEO PROMPT - VARIATION {variation} (Total length: {total} seconds)"
    ));
    lines.push(header(campaign));
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines.push(format!("Creative concept: {}: {}", idea.title, idea.description));
    lines.push(format!("Objective: {}", campaign.goal));
    lines.push(String::new());
    lines.push("General rules:".to_string());
    lines.push(format!(
        "- Output must be {} separate clip prompts. Each prompt is for a clip of up to 8 seconds.",
        segments.len()
    ));
    lines.push(
        "- All visuals must keep actor, outfit, lighting and scene consistent across all segments."
            .to_string(),
    );
    lines.push(
        "- The actor holds a phone but the screen is never shown directly to the camera."
            .to_string(),
    );
    lines.push(format!(
        "- The final spoken dialog must be written entirely in {lang}."
    ));
    lines.push(String::new());

    let mut elapsed = 0u32;
    for (idx, seg_len) in segments.iter().enumerate() {
        let start = elapsed + 1;
        let end = elapsed + seg_len;
        elapsed = end;

        // Non-empty fixed set
        let focus = VIDEO_FOCUS.choose(rng).unwrap_or(&VIDEO_FOCUS[0]);
        let example = example_dialogue(
            &campaign.language.code,
            &campaign.market,
            &campaign.brand,
            rng,
        );

        lines.push(format!(
            "--- SEGMENT {} of {}: seconds {start} to {end} ---",
            idx + 1,
            segments.len()
        ));
        lines.push(format!(
            "1. VISUAL: Vertical 9:16. Describe exact framing, movement and actions of {} for seconds {start} to {end}. Focus on: {focus}.",
            campaign.actor
        ));
        lines.push(format!(
            "2. DIALOG: Write the full spoken script for this {seg_len} second segment, line by line, in {lang}. The script must fit comfortably in {seg_len} seconds."
        ));
        lines.push(format!(
            "   Dialogue tone example (must be written in {lang} in the final prompt):"
        ));
        for line in example {
            lines.push(format!("   {line}"));
        }
        lines.push(String::new());
    }

    lines.push("--- REFERENCE FRAME (still image for frame 1) ---".to_string());
    lines.push(render_reference_frame(campaign, variation));

    lines.join("\n")
}

/// A still-image description for frame 1, built only from invariant scene
/// fields so it matches every segment of its variation.
fn render_reference_frame(campaign: &Campaign, variation: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "Reference image for the FIRST FRAME of the video. Variation {variation}."
    ));
    lines.push(header(campaign));
    lines.push(String::new());
    lines.push("Visual:".to_string());
    lines.push(format!(
        "- A realistic portrait of {}, natural and unposed.",
        campaign.actor
    ));
    lines.push(format!(
        "- Environment must clearly match {} (home, street, office or taxi).",
        campaign.market
    ));
    lines.push("- Vertical 9:16 framing, chest-up or waist-up, soft realistic lighting.".to_string());
    lines.push(
        "- The actor holds a phone; the screen is never visible to the camera.".to_string(),
    );
    lines.push(
        "- Same actor look, outfit and environment as the video segments above.".to_string(),
    );
    lines.push("- No text, no logos, no CTA, no graphic overlays.".to_string());
    lines.push(String::new());
    lines.push(
        "This image must look exactly like the first frame of a real vertical UGC video."
            .to_string(),
    );
    lines.join("\n")
}

fn render_image_variation<R: Rng>(
    campaign: &Campaign,
    idea: &Idea,
    variation: usize,
    rng: &mut R,
) -> String {
    let lang = &campaign.language.label;
    // Non-empty fixed set
    let layout = IMAGE_LAYOUT_FOCUS
        .choose(rng)
        .unwrap_or(&IMAGE_LAYOUT_FOCUS[0]);

    let mut lines: Vec<String> = Vec::new();
    lines.push(RULE.to_string());
    lines.push(format!("IMAGE PROMPT - VARIATION {variation}"));
    lines.push(header(campaign));
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines.push(format!("Creative concept: {}: {}", idea.title, idea.description));
    lines.push(format!("Objective: {}", campaign.goal));
    lines.push(String::new());
    lines.push(format!(
        "1. VISUAL: Vertical 9:16 format for mobile placement. Focus on: {layout}."
    ));
    lines.push(format!(
        "2. SCENE: Describe the image contents, {} and a setting that feels native to {}.",
        campaign.actor, campaign.market
    ));
    lines.push(format!(
        "3. BRANDING: Use official {} colors and logo. Never use real teams or copyrighted player images.",
        campaign.brand
    ));
    lines.push(format!(
        "4. TEXT: All visible text must be in {lang}. Include a short bold headline, one supporting line, and a clear CTA (e.g., Download now)."
    ));
    lines.push("--- END PROMPT ---".to_string());

    lines.join("\n")
}
