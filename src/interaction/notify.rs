//! Delivery of a single notification.

use tracing::{error, info, instrument};

use crate::{base::types::Delivery, service::chat::ChatClient};

use super::message::Notification;

/// Send one notification to one channel.
///
/// This never fails: the outcome is logged and returned as a [`Delivery`], so a failed
/// recipient cannot stop the others from being notified.
#[instrument(skip(chat, notification), fields(kind = ?notification.kind))]
pub async fn notify(chat: &ChatClient, channel_id: &str, notification: &Notification) -> Delivery {
    let message = notification.to_message();

    match chat.post_message(channel_id, &message).await {
        Ok(response) => {
            info!("Sent Slack message to `{}`: {}", channel_id, response);

            Delivery::Sent {
                channel_id: channel_id.to_string(),
                response,
            }
        }
        Err(err) => {
            error!("Failed to send Slack message to `{}`: {:#}", channel_id, err);

            Delivery::Failed {
                channel_id: channel_id.to_string(),
                reason: format!("{err:#}"),
            }
        }
    }
}
