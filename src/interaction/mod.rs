//! Event handling for the notifier.
//!
//! This module turns a GitHub event into Slack notifications:
//! - Formatting notifications into message blocks
//! - Delivering a notification to a single channel
//! - Dispatching an event to every recipient it concerns

pub mod dispatch;
pub mod message;
pub mod notify;
