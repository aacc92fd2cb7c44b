//! Typed view of the GitHub webhook payloads the notifier reacts to.
//!
//! The raw payload is validated at the boundary: recognised (event, action)
//! pairs must carry every field the notification needs, anything else is
//! reported as unsupported and skipped.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use super::types::Res;

// Raw payload types.

#[derive(Debug, Deserialize)]
struct GhUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GhLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GhIssue {
    number: u64,
    title: String,
    user: GhUser,
    #[serde(default)]
    labels: Vec<GhLabel>,
}

#[derive(Debug, Deserialize)]
struct GhComment {
    html_url: String,
    user: GhUser,
}

#[derive(Debug, Deserialize)]
struct GhPullRequest {
    number: u64,
    title: String,
    html_url: String,
    user: GhUser,
    #[serde(default)]
    labels: Vec<GhLabel>,
    #[serde(default)]
    requested_reviewers: Vec<GhUser>,
    #[serde(default)]
    merged: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct GhReview {
    state: String,
    html_url: String,
    user: GhUser,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum IssueCommentPayload {
    Created { comment: GhComment, issue: GhIssue },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum PullRequestPayload {
    ReviewRequested { pull_request: GhPullRequest },
    Closed { pull_request: GhPullRequest },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum PullRequestReviewPayload {
    Submitted { review: GhReview, pull_request: GhPullRequest },
    #[serde(other)]
    Other,
}

// Public types.

/// The issue or pull request a notification is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub number: u64,
    pub title: String,
    /// Label names, in payload order.
    pub labels: Vec<String>,
}

impl Subject {
    /// The title shown in the message, e.g. `#42 Fix the login page`.
    pub fn display_title(&self) -> String {
        format!("#{} {}", self.number, self.title)
    }
}

impl From<&GhIssue> for Subject {
    fn from(issue: &GhIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title.clone(),
            labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

impl From<&GhPullRequest> for Subject {
    fn from(pr: &GhPullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.clone(),
            labels: pr.labels.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

/// A GitHub event the notifier knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `issue_comment` / `created`.
    CommentCreated { commenter: String, owner: String, url: String, subject: Subject },
    /// `pull_request` / `review_requested`.
    ReviewRequested { url: String, subject: Subject },
    /// `pull_request` / `closed`.
    PullRequestClosed { merged: bool, reviewers: Vec<String>, url: String, subject: Subject },
    /// `pull_request_review` / `submitted`.
    ReviewSubmitted { reviewer: String, owner: String, approved: bool, url: String, subject: Subject },
}

impl Event {
    /// Parse a webhook payload for the given event name (`GITHUB_EVENT_NAME`).
    ///
    /// Returns `Ok(None)` for events and actions (including a missing `action`) that do not
    /// produce notifications, and an error when a recognised event is missing required fields.
    pub fn parse(event_name: &str, payload: Value) -> Res<Option<Self>> {
        if payload.get("action").and_then(Value::as_str).is_none() {
            return Ok(None);
        }

        let event = match event_name {
            "issue_comment" => match serde_json::from_value(payload).context("Failed to parse `issue_comment` payload")? {
                IssueCommentPayload::Created { comment, issue } => Some(Event::CommentCreated {
                    commenter: comment.user.login,
                    owner: issue.user.login.clone(),
                    url: comment.html_url,
                    subject: Subject::from(&issue),
                }),
                IssueCommentPayload::Other => None,
            },
            "pull_request" => match serde_json::from_value(payload).context("Failed to parse `pull_request` payload")? {
                PullRequestPayload::ReviewRequested { pull_request } => Some(Event::ReviewRequested {
                    subject: Subject::from(&pull_request),
                    url: pull_request.html_url,
                }),
                PullRequestPayload::Closed { pull_request } => Some(Event::PullRequestClosed {
                    subject: Subject::from(&pull_request),
                    merged: pull_request.merged.unwrap_or(false),
                    reviewers: pull_request.requested_reviewers.into_iter().map(|r| r.login).collect(),
                    url: pull_request.html_url,
                }),
                PullRequestPayload::Other => None,
            },
            "pull_request_review" => match serde_json::from_value(payload).context("Failed to parse `pull_request_review` payload")? {
                PullRequestReviewPayload::Submitted { review, pull_request } => Some(Event::ReviewSubmitted {
                    subject: Subject::from(&pull_request),
                    reviewer: review.user.login,
                    owner: pull_request.user.login,
                    approved: review.state.eq_ignore_ascii_case("approved"),
                    url: review.html_url,
                }),
                PullRequestReviewPayload::Other => None,
            },
            _ => None,
        };

        Ok(event)
    }

    /// The issue or pull request this event concerns.
    pub fn subject(&self) -> &Subject {
        match self {
            Event::CommentCreated { subject, .. }
            | Event::ReviewRequested { subject, .. }
            | Event::PullRequestClosed { subject, .. }
            | Event::ReviewSubmitted { subject, .. } => subject,
        }
    }

    /// The link the notification points at.
    pub fn url(&self) -> &str {
        match self {
            Event::CommentCreated { url, .. } | Event::ReviewRequested { url, .. } | Event::PullRequestClosed { url, .. } | Event::ReviewSubmitted { url, .. } => url,
        }
    }
}

// Tests.
