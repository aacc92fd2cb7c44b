//! Chat client that logs messages instead of sending them.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, instrument};

use crate::base::types::Res;

use super::{ChatClient, ChatMessage, GenericChatClient};

impl ChatClient {
    /// Creates a chat client that only logs what would have been posted.
    pub fn dry_run() -> Self {
        Self { inner: Arc::new(DryRunChatClient) }
    }
}

/// Logging implementation used for `dry_run`.
struct DryRunChatClient;

#[async_trait]
impl GenericChatClient for DryRunChatClient {
    #[instrument(skip(self, message))]
    async fn post_message(&self, channel_id: &str, message: &ChatMessage) -> Res<String> {
        let body = json!({
            "channel": channel_id,
            "blocks": message.blocks,
            "text": message.text,
        });

        info!("[DRY RUN] Would post: {}", body);

        Ok(json!({ "ok": true, "channel": channel_id, "dry_run": true }).to_string())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acknowledges_without_sending() {
        let chat = ChatClient::dry_run();
        let message = ChatMessage { blocks: vec![], text: Some("hello".to_string()) };

        let response = chat.post_message("D123", &message).await.unwrap();
        let response: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(response["ok"], true);
        assert_eq!(response["channel"], "D123");
    }
}
