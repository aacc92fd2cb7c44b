//! Deciding who gets notified about an event, and notifying them.

use futures::future::join_all;
use tracing::{info, instrument, warn};

use crate::{
    base::{directory::UserDirectory, event::Event, types::Delivery},
    service::chat::ChatClient,
};

use super::{
    message::{Notification, NotificationKind},
    notify::notify,
};

/// A notification addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    /// GitHub login of the recipient.
    pub recipient: String,
    /// Slack channel the message is posted to.
    pub channel_id: String,
    pub notification: Notification,
}

/// Work out which notifications an event warrants.
///
/// Recipients (or required actors) missing from the directory are logged and skipped;
/// they never turn into errors.
pub fn plan(event: &Event, directory: &UserDirectory, reviewer_login: Option<&str>) -> Vec<Outgoing> {
    match event {
        Event::CommentCreated { commenter, owner, .. } => {
            let Some(channel_id) = lookup(directory, owner, "comment created") else {
                return vec![];
            };

            if lookup(directory, commenter, "comment created").is_none() {
                return vec![];
            }

            vec![outgoing(owner, channel_id, NotificationKind::NewComment, event)]
        }
        Event::ReviewRequested { .. } => {
            let Some(reviewer) = reviewer_login else {
                warn!("[review requested] `REVIEWER_LOGIN` is not set; skipping.");
                return vec![];
            };

            let Some(channel_id) = lookup(directory, reviewer, "review requested") else {
                return vec![];
            };

            vec![outgoing(reviewer, channel_id, NotificationKind::ReviewerAssigned, event)]
        }
        Event::PullRequestClosed { merged, reviewers, .. } => {
            let kind = if *merged { NotificationKind::Merged } else { NotificationKind::Closed };

            if reviewers.is_empty() {
                info!("[pull request closed] No requested reviewers to notify.");
            }

            reviewers
                .iter()
                .filter_map(|reviewer| lookup(directory, reviewer, "pull request closed").map(|channel_id| outgoing(reviewer, channel_id, kind, event)))
                .collect()
        }
        Event::ReviewSubmitted { reviewer, owner, approved, .. } => {
            if reviewer == owner {
                info!("[review submitted] `{}` reviewed their own pull request; skipping.", reviewer);
                return vec![];
            }

            let Some(channel_id) = lookup(directory, owner, "review submitted") else {
                return vec![];
            };

            let kind = if *approved { NotificationKind::Approved } else { NotificationKind::NewReview };

            vec![outgoing(owner, channel_id, kind, event)]
        }
    }
}

/// Plan and send every notification for an event.
///
/// Each send is independent; all of them are awaited before returning, and their
/// outcomes are returned in planning order.
#[instrument(skip_all)]
pub async fn dispatch(event: &Event, directory: &UserDirectory, reviewer_login: Option<&str>, chat: &ChatClient) -> Vec<Delivery> {
    let outgoing = plan(event, directory, reviewer_login);

    if outgoing.is_empty() {
        info!("No notifications to send.");
        return vec![];
    }

    info!("Sending {} notification(s) ...", outgoing.len());

    join_all(outgoing.iter().map(|o| notify(chat, &o.channel_id, &o.notification))).await
}

fn lookup<'a>(directory: &'a UserDirectory, login: &str, stage: &str) -> Option<&'a str> {
    let channel_id = directory.direct_message_id(login);

    if channel_id.is_none() {
        warn!("[{}] No Slack user info for `{}`; skipping.", stage, login);
    }

    channel_id
}

fn outgoing(recipient: &str, channel_id: &str, kind: NotificationKind, event: &Event) -> Outgoing {
    Outgoing {
        recipient: recipient.to_string(),
        channel_id: channel_id.to_string(),
        notification: Notification::new(kind, event),
    }
}

// Tests.
