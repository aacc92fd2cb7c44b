//! Rendering of notifications into Slack blocks.
//!
//! Everything in here is pure; the same input always renders the same blocks.

use slack_morphism::prelude::*;

use crate::{base::event::Event, service::chat::ChatMessage};

/// Rendered in place of the label list when the subject has no labels.
pub const NO_LABEL: &str = "`no label`";

/// The kind of notification, which decides the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    NewComment,
    ReviewerAssigned,
    Merged,
    Closed,
    Approved,
    NewReview,
}

impl NotificationKind {
    /// The mrkdwn heading of the message.
    pub fn title_text(&self) -> &'static str {
        match self {
            NotificationKind::NewComment => "💬 *A new comment was posted!*",
            NotificationKind::ReviewerAssigned => "💬 *You were assigned as a reviewer!*",
            NotificationKind::Merged => "📢 *PR was `Merged`!*",
            NotificationKind::Closed => "📢 *PR was `Closed`!*",
            NotificationKind::Approved => "📢 *PR was `Approved`!*",
            NotificationKind::NewReview => "💬 *A new review was posted!*",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            NotificationKind::NewComment => "has a new comment",
            NotificationKind::ReviewerAssigned => "needs your review",
            NotificationKind::Merged => "was merged",
            NotificationKind::Closed => "was closed",
            NotificationKind::Approved => "was approved",
            NotificationKind::NewReview => "has a new review",
        }
    }
}

/// One notification, before it is addressed to anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub link: String,
    /// Title including the reference number, e.g. `#42 Fix the login page`.
    pub display_title: String,
    pub labels: Vec<String>,
}

impl Notification {
    /// Build a notification of the given kind for an event.
    pub fn new(kind: NotificationKind, event: &Event) -> Self {
        let subject = event.subject();

        Self {
            kind,
            link: event.url().to_string(),
            display_title: subject.display_title(),
            labels: subject.labels.clone(),
        }
    }

    /// Plain-text summary, e.g. `#42 Fix the login page was merged`.
    pub fn fallback_text(&self) -> String {
        format!("{} {}", self.display_title, self.kind.summary())
    }

    /// Render the full chat message.
    pub fn to_message(&self) -> ChatMessage {
        ChatMessage {
            blocks: create_message_blocks(self.kind.title_text(), &self.link, &self.display_title, &self.labels),
            text: Some(self.fallback_text()),
        }
    }
}

/// Build the three message blocks: heading, divider, and details.
pub fn create_message_blocks(title_text: &str, link: &str, display_title: &str, labels: &[String]) -> Vec<SlackBlock> {
    let details = format!("• *PR title*: [{display_title}]({link})\n• *Labels*: {}", render_labels(labels));

    vec![
        SlackBlock::Section(SlackSectionBlock::new().with_fields(vec![markdown(title_text)])),
        SlackBlock::Divider(SlackDividerBlock::new()),
        SlackBlock::Section(SlackSectionBlock::new().with_fields(vec![markdown(&details)])),
    ]
}

/// Render labels as backticked names joined by `, `, or [`NO_LABEL`] when empty.
pub fn render_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        return NO_LABEL.to_string();
    }

    labels.iter().map(|l| format!("`{l}`")).collect::<Vec<_>>().join(", ")
}

fn markdown(text: &str) -> SlackBlockText {
    SlackBlockText::MarkDown(SlackBlockMarkDownText::new(text.to_string()))
}

// Tests.
