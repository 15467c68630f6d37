//! Static fallback idea pool.
//!
//! Pre-written concepts used whenever the external idea generator is
//! unavailable or fails. The pool is immutable content data, safely shared
//! read-only across all sessions; ordering only matters for cyclic reuse
//! when more ideas are requested than the pool holds.

use super::Idea;
use crate::session::CreativeFormat;

const VIDEO_POOL: &[(&str, &str)] = &[
    (
        "Match day reaction",
        "A fan reacts live to a dramatic match moment at home, phone in hand, and tells the viewer how the app kept them ahead of everyone else in the room.",
    ),
    (
        "Halftime quick check",
        "During the halftime break the actor does a ten-second check of scores and fixtures, then looks up amazed at how fast it was.",
    ),
    (
        "On the go update",
        "In the back of a taxi the actor catches up on today's results between stops, narrating what they see without ever showing the screen.",
    ),
    (
        "Weak network, still working",
        "Out in an area with poor signal the actor is surprised the app still refreshes live scores, and challenges the viewer to try it.",
    ),
    (
        "Friends ask the expert",
        "Friends around a TV keep asking the actor for updates; the actor grins, taps the phone and plays oracle for the whole room.",
    ),
];

const IMAGE_POOL: &[(&str, &str)] = &[
    (
        "Big league spotlight",
        "A bold layout built around tonight's fixtures, with the brand logo front and center and a single dominant call to action.",
    ),
    (
        "Fan celebration close up",
        "A tight crop of a cheering fan in team-neutral colors, brand elements framing the emotion, headline above, CTA below.",
    ),
    (
        "Clean minimal layout",
        "A calm composition in brand colors with lots of negative space, one short promise line, and an unmissable download button.",
    ),
    (
        "Top odds banner",
        "Strong promotional numbers take most of the frame, with a smaller logo and a clear sign-up call to action underneath.",
    ),
    (
        "Phone in hand",
        "A hand holding a phone at the center of the frame, screen away from the camera, surrounded by floating brand accents.",
    ),
];

/// Returns the fallback pool for a format, localized to the market by name.
pub fn fallback_pool(format: CreativeFormat, market: &str) -> Vec<Idea> {
    let raw = match format {
        CreativeFormat::Video => VIDEO_POOL,
        CreativeFormat::Image => IMAGE_POOL,
    };

    raw.iter()
        .map(|(title, description)| {
            Idea::new(*title, format!("{description} Set in {market}."))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_nonempty_and_distinct() {
        for format in [CreativeFormat::Video, CreativeFormat::Image] {
            let pool = fallback_pool(format, "Argentina");
            assert!(pool.len() >= 4);

            let mut titles: Vec<_> = pool.iter().map(|i| i.title.clone()).collect();
            titles.sort();
            titles.dedup();
            assert_eq!(titles.len(), pool.len(), "duplicate titles in {format} pool");
        }
    }

    #[test]
    fn test_pool_descriptions_mention_market() {
        let pool = fallback_pool(CreativeFormat::Video, "Malawi");
        assert!(pool.iter().all(|i| i.description.contains("Malawi")));
    }
}
