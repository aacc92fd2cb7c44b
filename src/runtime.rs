//! Runtime services and shared state for the notifier.

use tracing::{info, instrument, warn};

use crate::{
    base::{
        config::Config,
        directory::UserDirectory,
        event::Event,
        types::{Delivery, Res},
    },
    interaction::dispatch,
    service::chat::ChatClient,
};

/// Runtime service context.
///
/// This struct holds the chat client and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the chat client.
        let chat = if config.dry_run {
            info!("Dry run enabled; messages will only be logged.");
            ChatClient::dry_run()
        } else {
            if config.slack_bot_token.trim().is_empty() {
                warn!("Slack bot token (`INPUT_SLACK_BOT_TOKEN`) is not set; sends will fail.");
            }

            ChatClient::slack(&config)?
        };

        Ok(Self { config, chat })
    }

    /// Notify everyone the event concerns.
    pub async fn handle(&self, event: &Event, directory: &UserDirectory) -> Vec<Delivery> {
        dispatch::dispatch(event, directory, self.config.reviewer_login(), &self.chat).await
    }
}
