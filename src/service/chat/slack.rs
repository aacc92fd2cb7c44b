//! Slack implementation of the chat service.
//!
//! Messages are sent with the Web API `chat.postMessage` method, authenticated
//! with the bot token.  Posting to a user's direct message channel id delivers
//! the notification as a DM.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::prelude::*;
use tracing::instrument;

use crate::base::{config::Config, types::Res};

use super::{ChatClient, ChatMessage, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub fn slack(config: &Config) -> Res<Self> {
        let client = SlackChatClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    bot_token: SlackApiToken,
    client: Arc<FullClient>,
}

impl Deref for SlackChatClient {
    type Target = FullClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    fn new(config: &Config) -> Res<Self> {
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_http1().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        Ok(Self { bot_token, client })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    #[instrument(skip(self, message))]
    async fn post_message(&self, channel_id: &str, message: &ChatMessage) -> Res<String> {
        let mut content = SlackMessageContent::new().with_blocks(message.blocks.clone());

        if let Some(text) = &message.text {
            content = content.with_text(text.clone());
        }

        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), content);

        let session = self.client.open_session(&self.bot_token);

        // Slack reports `"ok": false` as an API error, so anything past this point was acknowledged.
        let response = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(serde_json::to_string(&response)?)
    }
}
