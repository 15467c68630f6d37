//! Local line-oriented chat transport.
//!
//! Stands in for a real chat transport: every stdin line is one user
//! action tagged with a single session key, and every outbound message is
//! printed in order, split into chunks at the transport size limit.

use anyhow::Result;
use camp_core::config::{Config, GEMINI_KEY_ENV};
use camp_core::flow::{CampaignFlow, UserInput};
use camp_core::idea::{IdeaBank, IdeaSource};
use camp_interaction::GeminiApiAgent;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Maximum characters per delivered message chunk.
const CHUNK_SIZE: usize = 3500;

pub async fn run_chat(seed: Option<u64>, session_key: &str) -> Result<()> {
    let config = Config::local(
        std::env::var(GEMINI_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty()),
    );

    let source: Option<Arc<dyn IdeaSource>> = match config.gemini_api_key {
        Some(key) => {
            tracing::info!("idea generation enabled via Gemini");
            Some(Arc::new(GeminiApiAgent::new(key)))
        }
        None => {
            tracing::info!("no {GEMINI_KEY_ENV} set, idea generation runs fallback-only");
            None
        }
    };

    let mut flow = CampaignFlow::new(IdeaBank::new(source));
    if let Some(seed) = seed {
        flow = flow.with_seed(seed);
    }

    println!("CAMP ready. Send /start to begin, /cancel to abort, Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = flow.handle(session_key, UserInput::parse(&line)).await?;
        for message in &reply.messages {
            for chunk in chunk_message(message, CHUNK_SIZE) {
                println!("{chunk}");
                println!();
            }
        }
    }

    Ok(())
}

/// Splits one message into ordered chunks of at most `limit` characters.
/// Concatenating the chunks reproduces the original text exactly.
fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(limit)
        .map(|c| c.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_messages_pass_through_whole() {
        assert_eq!(chunk_message("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_chunks_concatenate_back_losslessly() {
        let text = "abcdefghij".repeat(100);
        let chunks = chunk_message(&text, 128);

        assert!(chunks.iter().all(|c| c.chars().count() <= 128));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_chunking_respects_char_boundaries() {
        let text = "áé".repeat(300);
        let chunks = chunk_message(&text, 100);
        assert_eq!(chunks.concat(), text);
    }
}
