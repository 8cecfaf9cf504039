//! Chat backend trait and the default scripted implementation.
//!
//! `AppState` holds an `Arc<dyn Responder>`, so a different backend can be
//! swapped in without touching the handlers.

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chat::script::{
    select_reply, CannedReply, FALLBACK_REPLIES, GREETING, TYPING_DELAY_MAX_MS,
    TYPING_DELAY_MIN_MS,
};
use crate::errors::AppError;

/// One assistant turn as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub suggestions: Vec<String>,
    /// Pacing hint so clients can reproduce the widget's typing animation.
    pub typing_delay_ms: u64,
}

impl ChatReply {
    fn from_canned(canned: &CannedReply, typing_delay_ms: u64) -> Self {
        ChatReply {
            reply: canned.text.to_string(),
            suggestions: canned.suggestions.iter().map(|s| s.to_string()).collect(),
            typing_delay_ms,
        }
    }
}

/// The chat backend trait. Implement this to swap the scripted responder
/// for something else without touching the endpoint or handler code.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, message: &str) -> Result<ChatReply, AppError>;

    fn greeting(&self) -> ChatReply;
}

/// Default backend: the fixed keyword script. Holds no per-conversation state.
pub struct ScriptedResponder;

#[async_trait]
impl Responder for ScriptedResponder {
    async fn respond(&self, message: &str) -> Result<ChatReply, AppError> {
        let mut rng = rand::thread_rng();
        let fallback_index = rng.gen_range(0..FALLBACK_REPLIES.len());
        let delay = rng.gen_range(TYPING_DELAY_MIN_MS..TYPING_DELAY_MAX_MS);

        Ok(ChatReply::from_canned(
            select_reply(message, fallback_index),
            delay,
        ))
    }

    fn greeting(&self) -> ChatReply {
        ChatReply::from_canned(&GREETING, TYPING_DELAY_MIN_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matched_input_gets_category_reply() {
        let reply = ScriptedResponder
            .respond("tell me about your projects")
            .await
            .unwrap();
        assert!(reply.reply.contains("portfolio"));
        assert!(!reply.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_typing_delay_stays_in_range() {
        for _ in 0..50 {
            let reply = ScriptedResponder.respond("anything at all").await.unwrap();
            assert!(reply.typing_delay_ms >= TYPING_DELAY_MIN_MS);
            assert!(reply.typing_delay_ms < TYPING_DELAY_MAX_MS);
        }
    }

    #[tokio::test]
    async fn test_fallback_reply_is_from_pool() {
        let reply = ScriptedResponder.respond("xyzzy").await.unwrap();
        assert!(FALLBACK_REPLIES.iter().any(|f| f.text == reply.reply));
    }

    #[test]
    fn test_greeting_matches_script() {
        let greeting = ScriptedResponder.greeting();
        assert_eq!(greeting.reply, GREETING.text);
        assert_eq!(greeting.suggestions.len(), GREETING.suggestions.len());
    }
}
