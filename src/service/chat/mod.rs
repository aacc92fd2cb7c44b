pub mod dry_run;
pub mod slack;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use slack_morphism::prelude::SlackBlock;

use crate::base::types::Res;

// Types.

/// A message body ready to be posted to a chat channel.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// The rendered blocks.
    pub blocks: Vec<SlackBlock>,
    /// Plain-text fallback used by notifications and clients that cannot render blocks.
    pub text: Option<String>,
}

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the single outbound operation the notifier needs.
/// Implementing this trait allows different chat services (or a logging stand-in)
/// to be used by the dispatcher.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Post a message to a channel (usually a direct message conversation).
    ///
    /// Returns the raw response body on success.  An error means the call failed at the
    /// transport level or the platform did not acknowledge the message.
    async fn post_message(&self, channel_id: &str, message: &ChatMessage) -> Res<String>;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
